//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `ProductRepository`
//! that stores products in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and local development when no DynamoDB endpoint is available.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
