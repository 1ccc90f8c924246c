//! Read-only client for the external catalog service.

use async_trait::async_trait;

use crate::client::errors::ClientResult;
use crate::domain::product::{Category, Product};
use crate::domain::query::{QueryState, SortField, SortOrder};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Parameters of one list request, in the pinned wire contract:
/// `skip`, `limit`, `search`, `category`, `sortBy`, `sortOrder`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_ITEMS_PER_PAGE,
            search: None,
            category: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.sort_order = order;
        self
    }

    pub fn paginate(mut self, page: u32, per_page: usize) -> Self {
        self.skip = (page.max(1) as usize - 1) * per_page;
        self.limit = per_page;
        self
    }
}

impl From<&QueryState> for ListQuery {
    /// Derives the one list request matching a query state.
    fn from(state: &QueryState) -> Self {
        let mut query = ListQuery::new()
            .paginate(state.page, DEFAULT_ITEMS_PER_PAGE)
            .sort(state.sort_by, state.sort_order);
        if let Some(search) = state.search() {
            query = query.search(search);
        }
        if let Some(category) = state.category() {
            query = query.category(category);
        }
        query
    }
}

/// Read operations against the catalog service.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// `GET /products` with the given filters; returns one page of products.
    async fn list_products(&self, query: ListQuery) -> ClientResult<Vec<Product>>;

    /// `GET /products/{id}` including nested reviews.
    async fn get_product(&self, id: i64) -> ClientResult<Product>;

    /// `GET /categories`.
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
}
