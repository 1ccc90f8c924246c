//! DTO modules that bridge services with templates and the JSON API.

pub mod detail;
pub mod listing;
