use actix_web::{HttpRequest, Responder, get, web};
use tera::{Context, Tera};

use crate::client::CatalogReader;
use crate::domain::query::QueryState;
use crate::routes::{redirect, render_template};
use crate::services::listing::load_listing_page;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    catalog: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let raw = req.query_string();
    let query = QueryState::from_query_str(raw);

    // The URL mirrors the query state: a non-canonical query (malformed or
    // partial parameters) is rewritten to the derived canonical form.
    let canonical = query.to_query_string();
    if !raw.is_empty() && raw != canonical {
        return redirect(&format!("/?{canonical}"));
    }

    let mut context = Context::new();
    context.insert("current_page", "index");

    match load_listing_page(catalog.get_ref(), query.clone()).await {
        Ok(page) => {
            context.insert("products", &page.products);
            context.insert("categories", &page.categories);
            context.insert("query", &page.query);
            context.insert("prev_url", &page.prev_url);
            context.insert("next_url", &page.next_url);
        }
        Err(err) => {
            log::error!("Failed to load listing page: {err}");
            context.insert("query", &query);
            context.insert("categories", &Vec::<crate::domain::product::Category>::new());
            context.insert("error", "Failed to load products");
        }
    }

    render_template(&tera, "main/index.html", &context)
}
