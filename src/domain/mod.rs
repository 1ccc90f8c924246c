//! Domain types exposed by the catalog client and the page services.

pub mod product;
pub mod query;
