//! DynamoDB repository implementation.
//!
//! Implements `ProductRepository` from `catalog_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use catalog_core::product::{Product, ProductData};
use catalog_core::storage::{ProductPage, ProductRepository, RepositoryError, Result};

use super::conversions::{item_to_product, product_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};
use super::keys::{product_key, ITEM_EXISTS, PRODUCT_ID};

/// DynamoDB-based repository implementation.
///
/// Holds only the SDK client and the table name, so it is cheap to share
/// behind an `Arc` across request handlers.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ProductRepository for DynamoDbRepository {
    async fn create(&self, data: &ProductData) -> Result<Product> {
        let product = Product::new(data.clone());

        // Fresh UUIDs don't collide, so the put is unconditional.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(&product)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, product.id.as_str()))?;

        tracing::debug!(product_id = %product.id, table = %self.table_name, "Stored new product");

        Ok(product)
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PRODUCT_ID, product_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_product(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let mut items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send();

        let mut products = Vec::new();
        while let Some(item) = items.try_next().await.map_err(map_scan_error)? {
            products.push(item_to_product(&item)?);
        }

        tracing::debug!(count = products.len(), table = %self.table_name, "Scanned products");

        Ok(products)
    }

    async fn list_page(&self, limit: usize, cursor: Option<&str>) -> Result<ProductPage> {
        let limit = i32::try_from(limit.max(1)).unwrap_or(i32::MAX);

        let mut request = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit);
        // DynamoDB rejects an empty key value.
        if let Some(cursor) = cursor.filter(|cursor| !cursor.is_empty()) {
            request = request.exclusive_start_key(PRODUCT_ID, product_key(cursor));
        }

        let output = request.send().await.map_err(map_scan_error)?;

        let products = output
            .items()
            .iter()
            .map(item_to_product)
            .collect::<Result<Vec<_>>>()?;

        // The table key is just ProductID, so the id alone resumes the scan.
        let next_cursor = output
            .last_evaluated_key()
            .and_then(|key| key.get(PRODUCT_ID))
            .and_then(|value| value.as_s().ok())
            .cloned();

        Ok(ProductPage {
            products,
            next_cursor,
        })
    }

    async fn update(&self, id: &str, data: &ProductData) -> Result<Option<Product>> {
        let Some(existing) = self.get_product(id).await? else {
            return Ok(None);
        };

        let product = existing.replaced_with(data.clone());

        // The condition stops a write from resurrecting an item deleted
        // after the lookup above.
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(&product)))
            .condition_expression(ITEM_EXISTS)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, id));

        match result {
            Ok(_) => Ok(Some(product)),
            Err(RepositoryError::NotFound { .. }) => {
                tracing::debug!(product_id = %id, "Product deleted before update was written");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(PRODUCT_ID, product_key(id))
            .condition_expression(ITEM_EXISTS)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id));

        match result {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
