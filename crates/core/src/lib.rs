//! Core types and pure functions for the catalog service.
//!
//! Nothing in this crate performs I/O. Storage backends, HTTP handlers and
//! process setup live in the `catalog` crate and depend on the types and
//! traits defined here.

pub mod auth;
pub mod product;
pub mod serde;
pub mod storage;
