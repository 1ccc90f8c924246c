//! Mock catalog client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::errors::ClientResult;
use crate::client::{CatalogReader, ListQuery};
use crate::domain::product::{Category, Product};

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogReader for Catalog {
        async fn list_products(&self, query: ListQuery) -> ClientResult<Vec<Product>>;
        async fn get_product(&self, id: i64) -> ClientResult<Product>;
        async fn list_categories(&self) -> ClientResult<Vec<Category>>;
    }
}
