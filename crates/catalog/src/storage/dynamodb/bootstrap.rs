//! Products table bootstrap.
//!
//! The plan is computed by pure functions (no I/O); `ensure_table` is the
//! imperative shell that describes the table and creates it when missing.
//! Running it against an existing table never modifies that table.

use std::time::Duration;

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
    TableStatus,
};
use aws_sdk_dynamodb::Client;
use catalog_core::storage::{RepositoryError, Result};

use super::error::{map_create_table_error, map_describe_table_error};
use super::keys::PRODUCT_ID;

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(1);

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    /// Sole (HASH) key, string typed.
    pub partition_key: String,
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical products table configuration.
pub fn products_table_config() -> TableConfig {
    TableConfig {
        table_name: "products".to_string(),
        partition_key: PRODUCT_ID.to_string(),
        read_capacity_units: 5,
        write_capacity_units: 5,
    }
}

/// Planned bootstrap action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists; it is left untouched.
    NoChanges { table_name: String },
}

/// What `ensure_table` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyExists,
}

/// Pure function: decide what to do given whether the table exists.
pub fn plan_bootstrap(table_exists: bool, desired: &TableConfig) -> BootstrapPlan {
    if table_exists {
        BootstrapPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        BootstrapPlan::CreateTable {
            config: desired.clone(),
        }
    }
}

/// Pure function: format a plan for logging.
pub fn format_bootstrap_plan(plan: &BootstrapPlan) -> Vec<String> {
    match plan {
        BootstrapPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key),
            format!(
                "  Provisioned throughput: {} RCU / {} WCU",
                config.read_capacity_units, config.write_capacity_units
            ),
        ],
        BootstrapPlan::NoChanges { table_name } => {
            vec![format!("  Table {} exists, no changes", table_name)]
        }
    }
}

/// Ensures the products table exists, creating it if necessary.
///
/// Any describe failure other than "table not found", and any create
/// failure other than "table already exists", is returned as
/// `RepositoryError::BootstrapFailed`.
pub async fn ensure_table(client: &Client, config: &TableConfig) -> Result<BootstrapOutcome> {
    let exists = table_exists(client, &config.table_name).await?;
    let plan = plan_bootstrap(exists, config);

    for line in format_bootstrap_plan(&plan) {
        tracing::debug!(table = %config.table_name, "{}", line);
    }

    match plan {
        BootstrapPlan::NoChanges { table_name } => {
            tracing::info!(table = %table_name, "Products table already exists");
            Ok(BootstrapOutcome::AlreadyExists)
        }
        BootstrapPlan::CreateTable { config } => {
            if !create_table(client, &config).await? {
                tracing::info!(table = %config.table_name, "Products table created concurrently");
                return Ok(BootstrapOutcome::AlreadyExists);
            }
            wait_for_table_active(client, &config.table_name).await?;
            tracing::info!(table = %config.table_name, "Created products table");
            Ok(BootstrapOutcome::Created)
        }
    }
}

async fn table_exists(client: &Client, table_name: &str) -> Result<bool> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => Ok(true),
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(false),
            err => Err(map_describe_table_error(err)),
        },
    }
}

async fn table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => Ok(response
            .table()
            .and_then(|table| table.table_status())
            .cloned()),
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(map_describe_table_error(err)),
        },
    }
}

/// Issues the create request. Returns `false` if the table appeared in the meantime.
async fn create_table(client: &Client, config: &TableConfig) -> Result<bool> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| RepositoryError::BootstrapFailed(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| RepositoryError::BootstrapFailed(e.to_string()))?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(config.read_capacity_units)
        .write_capacity_units(config.write_capacity_units)
        .build()
        .map_err(|e| RepositoryError::BootstrapFailed(e.to_string()))?;

    let result = client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .provisioned_throughput(throughput)
        .send()
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(err) => match err.into_service_error() {
            CreateTableError::ResourceInUseException(_) => Ok(false),
            err => Err(map_create_table_error(err)),
        },
    }
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        if let Some(TableStatus::Active) = table_status(client, table_name).await? {
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(RepositoryError::BootstrapFailed(format!(
        "Timeout waiting for table {} to become active",
        table_name
    )))
}
