//! Application state shared by all request handlers.
//!
//! The order repository is built once at startup and injected here; handlers
//! never reach for a process-wide client.

use std::sync::Arc;

use orders_core::storage::OrderRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request; the repository itself is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Order repository (DynamoDB or in-memory).
    pub order_repo: Arc<dyn OrderRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// Builds the repository selected by configuration.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let order_repo: Arc<dyn OrderRepository> = match config.storage {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, orders will not survive a restart");
                Arc::new(InMemoryRepository::new())
            }
            StorageBackend::DynamoDb => dynamodb_repository(config).await?,
        };

        Ok(Self::new(order_repo))
    }
}

#[cfg(feature = "dynamodb")]
async fn dynamodb_repository(config: &Config) -> anyhow::Result<Arc<dyn OrderRepository>> {
    let repo = crate::storage::DynamoDbRepository::from_config(config).await;
    tracing::info!(table = repo.table_name(), "DynamoDB repository ready");
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "dynamodb"))]
async fn dynamodb_repository(_config: &Config) -> anyhow::Result<Arc<dyn OrderRepository>> {
    anyhow::bail!(
        "DynamoDB storage requested but the 'dynamodb' feature is disabled. \
        Rebuild with --features dynamodb or set ORDERS_STORAGE=memory"
    )
}
