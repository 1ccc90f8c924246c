use crate::domain::product::{Category, Product};
use crate::domain::query::{QueryIntent, QueryState};
use crate::pagination::Paginated;

/// Data required to render the listing template.
pub struct ListingPageData {
    /// Page of products to show in the grid.
    pub products: Paginated<Product>,
    /// Categories for the filter dropdown; empty when the lookup failed.
    pub categories: Vec<Category>,
    /// Query state echoed back into the form controls.
    pub query: QueryState,
    /// URL of the previous page, absent exactly when `page == 1`.
    pub prev_url: Option<String>,
    /// URL of the next page; always present, the total count is unknown.
    pub next_url: String,
}

impl ListingPageData {
    pub fn new(products: Vec<Product>, categories: Vec<Category>, query: QueryState) -> Self {
        let prev_url = query.has_prev().then(|| {
            let mut prev = query.clone();
            prev.apply(QueryIntent::PrevPage);
            format!("/?{}", prev.to_query_string())
        });

        let mut next = query.clone();
        next.apply(QueryIntent::NextPage);
        let next_url = format!("/?{}", next.to_query_string());

        let page = query.page;

        Self {
            products: Paginated::new(products, page),
            categories,
            query,
            prev_url,
            next_url,
        }
    }
}
