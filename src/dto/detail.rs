use crate::domain::product::Product;

/// Data required to render the product detail template.
pub struct DetailPageData {
    /// The fetched product, reviews included.
    pub product: Product,
}
