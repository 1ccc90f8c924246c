use crate::client::{CatalogReader, ListQuery};
use crate::dto::listing::ListingPageData;
use crate::services::{ServiceError, ServiceResult};

pub use crate::domain::query::QueryState;

/// Loads the product list and filter options for the listing page.
///
/// Exactly one list request is issued per call, derived from the query state.
/// A categories failure degrades to an empty filter dropdown rather than
/// failing the page.
pub async fn load_listing_page<R>(catalog: &R, query: QueryState) -> ServiceResult<ListingPageData>
where
    R: CatalogReader + ?Sized,
{
    let products = catalog
        .list_products(ListQuery::from(&query))
        .await
        .map_err(|err| {
            log::error!("Failed to list products: {err}");
            ServiceError::from(err)
        })?;

    let categories = match catalog.list_categories().await {
        Ok(categories) => categories,
        Err(err) => {
            log::warn!("Failed to list categories: {err}");
            Vec::new()
        }
    };

    Ok(ListingPageData::new(products, categories, query))
}
