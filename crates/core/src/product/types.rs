use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::serialize_datetime_millis;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier, assigned by the store on creation.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative price. Checked by the caller, not by the store.
    pub price: f64,
    /// Creation timestamp with millisecond precision. Never changes.
    #[serde(serialize_with = "serialize_datetime_millis")]
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied, mutable part of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Creates a new product from caller data with a fresh UUID v4 and the
    /// current time truncated to milliseconds.
    pub fn new(data: ProductData) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            description: data.description,
            price: data.price,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Returns the full replacement of this product with `data`.
    ///
    /// `id` and `created_at` are carried over; every other field comes from `data`.
    pub fn replaced_with(&self, data: ProductData) -> Self {
        Self {
            id: self.id.clone(),
            name: data.name,
            description: data.description,
            price: data.price,
            created_at: self.created_at,
        }
    }

    /// Sets a specific ID for this product (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets a specific creation time (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns the mutable fields of this product.
    pub fn data(&self) -> ProductData {
        ProductData {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

impl ProductData {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
