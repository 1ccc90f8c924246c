#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use storefront::client::errors::{ClientError, ClientResult, StatusCode};
use storefront::client::{CatalogReader, ListQuery};
use storefront::domain::product::{Category, Product, Review};

pub fn product(id: i64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: 19.99,
        category: "smartphones".to_string(),
        images: vec![format!("https://cdn.example.com/{id}/1.png")],
        description: "A product.".to_string(),
        tags: vec!["gadget".to_string()],
        rating: 4.2,
        stock: 5,
        reviews: vec![],
    }
}

pub fn review(id: i64, name: &str, comment: &str) -> Review {
    Review {
        id,
        name: name.to_string(),
        date: Utc.with_ymd_and_hms(2024, 5, 23, 8, 56, 21).unwrap(),
        rating: 5.0,
        comment: comment.to_string(),
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Scriptable catalog double recording every list request it receives.
#[derive(Default)]
pub struct StubCatalog {
    pub list_calls: Mutex<Vec<ListQuery>>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub detail: Option<Product>,
    pub fail_list: bool,
}

#[async_trait]
impl CatalogReader for StubCatalog {
    async fn list_products(&self, query: ListQuery) -> ClientResult<Vec<Product>> {
        self.list_calls.lock().unwrap().push(query);
        if self.fail_list {
            return Err(ClientError::Status(StatusCode::BAD_GATEWAY));
        }
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        match &self.detail {
            Some(product) if product.id == id => Ok(product.clone()),
            _ => Err(ClientError::NotFound),
        }
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}
