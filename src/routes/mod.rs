//! HTTP route handlers and shared response helpers.

use actix_web::http::header;
use actix_web::{HttpResponse, http::header::ContentType};
use tera::{Context, Tera};

pub mod api;
pub mod main;
pub mod product;

/// Renders a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::html()).body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
