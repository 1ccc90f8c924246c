//! Configuration models for the server binary.

pub mod config;
