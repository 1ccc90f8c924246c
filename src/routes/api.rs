use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::client::{CatalogReader, ListQuery};
use crate::domain::query::QueryState;

/// JSON listing endpoint for programmatic consumers. Takes the same query
/// parameters as the listing page.
#[get("/v1/products")]
pub async fn api_v1_products(
    req: HttpRequest,
    catalog: web::Data<dyn CatalogReader>,
) -> impl Responder {
    let query = QueryState::from_query_str(req.query_string());

    match catalog.list_products(ListQuery::from(&query)).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
