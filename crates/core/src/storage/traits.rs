use async_trait::async_trait;

use crate::product::{Product, ProductData};

use super::{ProductPage, Result};

/// Repository for product operations.
///
/// Absence is not an error: lookups return `None`, and `update`/`delete` on
/// an unknown id return `None`/`false` without writing anything.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a product with a fresh id and creation time and stores it.
    async fn create(&self, data: &ProductData) -> Result<Product>;

    /// Gets a product by its ID.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Lists every stored product, in no particular order.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Lists at most `limit` products, starting after `cursor`.
    ///
    /// Feeding each page's `next_cursor` back in visits every product that
    /// existed for the whole walk exactly once. `limit` is at least 1. An
    /// empty `cursor` is the same as `None`.
    async fn list_page(&self, limit: usize, cursor: Option<&str>) -> Result<ProductPage>;

    /// Replaces the mutable fields of an existing product.
    ///
    /// `id` and `created_at` are preserved.
    async fn update(&self, id: &str, data: &ProductData) -> Result<Option<Product>>;

    /// Deletes a product. Returns `false` if it did not exist.
    async fn delete(&self, id: &str) -> Result<bool>;
}
