use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::client::CatalogReader;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::detail::load_detail_page;

#[get("/product/{id}")]
pub async fn show_product(
    id: web::Path<String>,
    catalog: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // A malformed id renders the same static error as a missing product.
    let page = match id.parse::<i64>() {
        Ok(id) => load_detail_page(catalog.get_ref(), id).await,
        Err(_) => Err(ServiceError::NotFound),
    };

    let mut context = Context::new();
    context.insert("current_page", "product");

    match page {
        Ok(page) => {
            context.insert("product", &page.product);
        }
        Err(err) => {
            log::error!("Failed to load product {id}: {err}");
            context.insert("error", "Failed to load product");
        }
    }

    render_template(&tera, "product/index.html", &context)
}
