//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The product store is a trait object so the DynamoDB and
//! in-memory backends are interchangeable at startup.

use std::sync::Arc;

use axum::extract::FromRef;

use catalog_core::storage::ProductRepository;

use crate::auth::AuthConfig;
use crate::config::{Config, StorageBackend};
use crate::storage::dynamodb::{create_client, ensure_table, products_table_config};
use crate::storage::{DynamoDbRepository, InMemoryRepository};

/// Shared application state.
///
/// This is cloned for each request handler; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    /// Product repository.
    pub products: Arc<dyn ProductRepository>,
    /// Bearer token settings.
    pub auth: AuthConfig,
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    /// Creates a new AppState from the given repository and auth settings.
    pub fn with_repository(products: Arc<dyn ProductRepository>, auth: AuthConfig) -> Self {
        Self { products, auth }
    }

    /// Builds the state for the configured backend.
    ///
    /// For DynamoDB this creates the SDK client and bootstraps the products
    /// table; a bootstrap failure is returned and should abort startup.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let auth = AuthConfig::new(config.auth_secret.clone());

        let products: Arc<dyn ProductRepository> = match config.storage {
            StorageBackend::DynamoDb => {
                let aws = config.aws_config();
                tracing::info!(
                    endpoint = %aws.target_display(),
                    table = %config.table_name,
                    "Using DynamoDB storage"
                );

                let client = create_client(&aws).await;
                let table = products_table_config().with_table_name(&config.table_name);
                let outcome = ensure_table(&client, &table).await?;
                tracing::debug!(outcome = ?outcome, "Bootstrap finished");

                let repo = DynamoDbRepository::new(client, table.table_name);
                tracing::info!(table = %repo.table_name(), "Products table ready");
                Arc::new(repo)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data will not be persisted");
                Arc::new(InMemoryRepository::new())
            }
        };

        Ok(Self::with_repository(products, auth))
    }

    /// Creates a state backed by an empty in-memory store.
    pub fn in_memory(secret: &str) -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()), AuthConfig::new(secret))
    }
}
