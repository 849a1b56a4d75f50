//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::product::{Product, ProductData};
use catalog_core::storage::{ProductPage, ProductRepository, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores `product` as-is, replacing any product with the same id.
    #[cfg(test)]
    pub async fn insert(&self, product: Product) {
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn create(&self, data: &ProductData) -> Result<Product> {
        let product = Product::new(data.clone());
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn list_page(&self, limit: usize, cursor: Option<&str>) -> Result<ProductPage> {
        let limit = limit.max(1);
        let products = self.products.read().await;

        // Pages walk the ids in order; the cursor is the last id handed out.
        let mut ids: Vec<&String> = products
            .keys()
            .filter(|id| cursor.map_or(true, |cursor| id.as_str() > cursor))
            .collect();
        ids.sort();

        let page: Vec<Product> = ids
            .iter()
            .take(limit)
            .filter_map(|id| products.get(id.as_str()).cloned())
            .collect();
        let next_cursor = if ids.len() > limit {
            page.last().map(|product| product.id.clone())
        } else {
            None
        };

        Ok(ProductPage {
            products: page,
            next_cursor,
        })
    }

    async fn update(&self, id: &str, data: &ProductData) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(existing) = products.get_mut(id) else {
            return Ok(None);
        };
        *existing = existing.replaced_with(data.clone());
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(id).is_some())
    }
}
