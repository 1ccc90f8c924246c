//! `reqwest`-backed implementation of [`CatalogReader`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::errors::{ClientError, ClientResult, StatusCode};
use crate::client::{CatalogReader, ListQuery};
use crate::domain::product::{Category, Product};

/// HTTP client bound to one catalog service base URL. No auth, no retry,
/// no caching; every call is a single request/response pair.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T>(&self, path: &str, params: &[(&str, String)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).query(params).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status => Err(ClientError::Status(status)),
        }
    }
}

#[async_trait]
impl CatalogReader for HttpCatalogClient {
    async fn list_products(&self, query: ListQuery) -> ClientResult<Vec<Product>> {
        let mut params = vec![
            ("skip", query.skip.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        params.push(("sortBy", query.sort_by.as_str().to_string()));
        params.push(("sortOrder", query.sort_order.as_str().to_string()));

        self.get_json("/products", &params).await
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.get_json(&format!("/products/{id}"), &[]).await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get_json("/categories", &[]).await
    }
}
