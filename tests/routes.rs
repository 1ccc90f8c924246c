mod common;

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use tera::Tera;

use common::{StubCatalog, category, product, review};
use storefront::client::CatalogReader;
use storefront::domain::product::Product;
use storefront::domain::query::{SortField, SortOrder};
use storefront::routes::api::api_v1_products;
use storefront::routes::main::show_index;
use storefront::routes::product::show_product;

macro_rules! init_app {
    ($catalog:expr) => {{
        let catalog: Arc<dyn CatalogReader> = $catalog;
        let tera = Tera::new("templates/**/*.html").unwrap();
        test::init_service(
            App::new()
                .service(web::scope("/api").service(api_v1_products))
                .service(show_index)
                .service(show_product)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::from(catalog)),
        )
        .await
    }};
}

#[actix_web::test]
async fn listing_issues_one_request_matching_the_url() {
    let catalog = Arc::new(StubCatalog {
        products: vec![product(1, "Phone")],
        categories: vec![category("smartphones", "Smartphones")],
        ..StubCatalog::default()
    });
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get()
        .uri("/?page=1&search=phone&category=smartphones&sortBy=price&sortOrder=asc")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Phone"));

    let calls = catalog.list_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].skip, 0);
    assert_eq!(calls[0].limit, 20);
    assert_eq!(calls[0].search.as_deref(), Some("phone"));
    assert_eq!(calls[0].category.as_deref(), Some("smartphones"));
    assert_eq!(calls[0].sort_by, SortField::Price);
    assert_eq!(calls[0].sort_order, SortOrder::Asc);
}

#[actix_web::test]
async fn page_two_requests_skip_twenty() {
    let catalog = Arc::new(StubCatalog::default());
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get()
        .uri("/?page=2&search=&category=&sortBy=price&sortOrder=asc")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    // Previous must link back to page 1 now that we are past it.
    assert!(html.contains("Page 2"));
    assert!(html.contains("page=1"));

    let calls = catalog.list_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].skip, 20);
}

#[actix_web::test]
async fn bare_root_renders_defaults_without_redirect() {
    let catalog = Arc::new(StubCatalog::default());
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let calls = catalog.list_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].skip, 0);
    assert_eq!(calls[0].search, None);
    assert_eq!(calls[0].category, None);
}

#[actix_web::test]
async fn non_canonical_query_redirects_to_canonical() {
    let catalog = Arc::new(StubCatalog::default());
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get().uri("/?page=abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/?page=1&search=&category=&sortBy=price&sortOrder=asc"
    );
    // No fetch is issued for a redirected request.
    assert!(catalog.list_calls.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn failed_list_fetch_renders_static_error() {
    let catalog = Arc::new(StubCatalog {
        fail_list: true,
        ..StubCatalog::default()
    });
    let app = init_app!(catalog);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Failed to load products"));
}

#[actix_web::test]
async fn detail_renders_product_and_reviews() {
    let mut detail = product(42, "Wireless Mouse");
    detail.reviews = vec![review(1, "Ada", "Works great")];
    let catalog = Arc::new(StubCatalog {
        detail: Some(detail),
        ..StubCatalog::default()
    });
    let app = init_app!(catalog);

    let req = test::TestRequest::get().uri("/product/42").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Wireless Mouse"));
    assert!(html.contains("Ada"));
    assert!(html.contains("Works great"));
    assert!(html.contains("In Stock"));
}

#[actix_web::test]
async fn missing_product_renders_static_error() {
    let catalog = Arc::new(StubCatalog::default());
    let app = init_app!(catalog);

    let req = test::TestRequest::get().uri("/product/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Failed to load product"));
}

#[actix_web::test]
async fn malformed_product_id_renders_static_error() {
    let catalog = Arc::new(StubCatalog::default());
    let app = init_app!(catalog);

    let req = test::TestRequest::get().uri("/product/abc").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Failed to load product"));
}

#[actix_web::test]
async fn api_returns_products_as_json() {
    let catalog = Arc::new(StubCatalog {
        products: vec![product(1, "Phone"), product(2, "Mug")],
        ..StubCatalog::default()
    });
    let app = init_app!(catalog.clone());

    let req = test::TestRequest::get()
        .uri("/api/v1/products?page=2&search=m")
        .to_request();
    let products: Vec<Product> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(products.len(), 2);

    let calls = catalog.list_calls.lock().unwrap();
    assert_eq!(calls[0].skip, 20);
    assert_eq!(calls[0].search.as_deref(), Some("m"));
}

#[actix_web::test]
async fn api_failure_returns_500() {
    let catalog = Arc::new(StubCatalog {
        fail_list: true,
        ..StubCatalog::default()
    });
    let app = init_app!(catalog);

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
