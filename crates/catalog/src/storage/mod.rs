//! Storage backend implementations.
//!
//! This module provides concrete implementations of `ProductRepository`
//! defined in `catalog_core::storage`. The backend is chosen at startup
//! (see `StorageBackend` in the config module).
//!
//! - `dynamodb`: AWS DynamoDB (or DynamoDB Local) via `aws-sdk-dynamodb`
//! - `memory`: process-local maps, for development and tests

pub mod dynamodb;
pub mod inmemory;

#[cfg(test)]
mod contract;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
