//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ProductRepository`
//! using `aws-sdk-dynamodb`, plus the idempotent bootstrap of the products table.
//!
//! Items live in a single table keyed by `ProductID` (string, no sort key):
//!
//! | Attribute     | Type | Value                          |
//! |---------------|------|--------------------------------|
//! | `ProductID`   | S    | product UUID                   |
//! | `Name`        | S    | product name                   |
//! | `Description` | S    | product description            |
//! | `Price`       | N    | decimal price                  |
//! | `CreatedAt`   | N    | creation time, Unix epoch ms   |

mod bootstrap;
mod client;
mod conversions;
mod error;
mod keys;
mod repository;

pub use bootstrap::{ensure_table, products_table_config};
pub use client::{create_client, AwsConfig};
pub use repository::DynamoDbRepository;
