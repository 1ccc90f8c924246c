#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::client::CatalogReader;
#[cfg(feature = "server")]
use crate::client::http::HttpCatalogClient;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_products;
#[cfg(feature = "server")]
use crate::routes::main::show_index;
#[cfg(feature = "server")]
use crate::routes::product::show_product;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod controller;
#[cfg(feature = "client")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "client")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let catalog: Arc<dyn CatalogReader> = Arc::new(HttpCatalogClient::new(&server_config.catalog_url));

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_products))
            .service(show_index)
            .service(show_product)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(catalog.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
