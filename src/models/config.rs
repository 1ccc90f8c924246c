//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the external catalog service.
    pub catalog_url: String,
    /// Glob passed to Tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
}
