use std::{env, fmt, str::FromStr};

use crate::storage::dynamodb::AwsConfig;

/// Which `ProductRepository` implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// DynamoDB, or DynamoDB Local when `AWS_ENDPOINT_URL` is set.
    #[value(name = "dynamodb")]
    DynamoDb,
    /// Process-local maps. Data is lost on exit.
    #[value(name = "memory")]
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => write!(f, "dynamodb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(Self::DynamoDb),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage backend (default: dynamodb)
    pub storage: StorageBackend,
    /// DynamoDB table holding the products (default: "products")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: unset)
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// HS256 secret for bearer tokens (default: "secret")
    pub auth_secret: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_BACKEND` - `dynamodb` or `memory` (default: dynamodb)
    /// - `PRODUCTS_TABLE_NAME` - DynamoDB table name (default: "products")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AUTH_SECRET` - Bearer token secret (default: "secret")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            storage: var("STORAGE_BACKEND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(StorageBackend::DynamoDb),
            table_name: var("PRODUCTS_TABLE_NAME").unwrap_or_else(|| "products".to_string()),
            aws_endpoint_url: var("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
            aws_region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            auth_secret: var("AUTH_SECRET").unwrap_or_else(|| "secret".to_string()),
        }
    }

    /// Overrides the storage backend (e.g. from the `--storage` flag).
    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    /// Get the AWS client settings.
    pub fn aws_config(&self) -> AwsConfig {
        AwsConfig {
            endpoint_url: self.aws_endpoint_url.clone(),
            region: self.aws_region.clone(),
        }
    }
}
