use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product as returned by the catalog service.
///
/// Immutable once fetched; owned by the view that fetched it and discarded on
/// navigation. List payloads may omit `reviews`, so it defaults to empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category: String,
    /// Ordered image URLs; the first one is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Average rating between 0 and 5.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Cover image URL, when the service supplied any images.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A customer review nested inside a [`Product`] detail payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub rating: f64,
    pub comment: String,
}

/// Read-only reference data used to populate the category filter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}
