use crate::client::CatalogReader;
use crate::dto::detail::DetailPageData;
use crate::services::{ServiceError, ServiceResult};

/// Loads one product with its reviews for the detail page.
///
/// No caching and no prefetch from the listing view; every visit fetches.
pub async fn load_detail_page<R>(catalog: &R, id: i64) -> ServiceResult<DetailPageData>
where
    R: CatalogReader + ?Sized,
{
    let product = catalog.get_product(id).await.map_err(|err| {
        log::error!("Failed to get product {id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(DetailPageData { product })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::errors::{ClientError, StatusCode};
    use crate::client::mock::MockCatalog;
    use crate::domain::product::Product;

    #[tokio::test]
    async fn missing_product_maps_to_not_found() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_product()
            .returning(|_| Err(ClientError::NotFound));

        let result = load_detail_page(&catalog, 999).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_catalog_error() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_product()
            .returning(|_| Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE)));

        let result = load_detail_page(&catalog, 1).await;
        assert!(matches!(result, Err(ServiceError::Catalog(_))));
    }

    #[tokio::test]
    async fn returns_the_fetched_product() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_product().returning(|id| {
            Ok(Product {
                id,
                title: "Mug".to_string(),
                price: 4.5,
                category: "kitchen-accessories".to_string(),
                images: vec![],
                description: String::new(),
                tags: vec![],
                rating: 0.0,
                stock: 0,
                reviews: vec![],
            })
        });

        let page = load_detail_page(&catalog, 7).await.unwrap();
        assert_eq!(page.product.id, 7);
    }
}
