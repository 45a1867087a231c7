use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

/// Which repository implementation backs the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// AWS DynamoDB (requires the `dynamodb` feature).
    DynamoDb,
    /// Process-local storage, lost on exit.
    Memory,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown storage backend '{0}' (expected 'dynamodb' or 'memory')")]
pub struct UnknownStorageBackend(String);

impl FromStr for StorageBackend {
    type Err = UnknownStorageBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(Self::DynamoDb),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(UnknownStorageBackend(other.to_string())),
        }
    }
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding order items (default: "orders")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: unset)
    pub aws_endpoint_url: Option<String>,
    /// Storage backend (default: DynamoDB)
    pub storage: StorageBackend,
    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "orders")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - custom endpoint URL (default: unset)
    /// - `ORDERS_STORAGE` - "dynamodb" or "memory" (default: "dynamodb")
    /// - `REQUEST_TIMEOUT_SECONDS` - request timeout (default: 10)
    /// - `LOG_FORMAT` - "pretty" or "json" (default: "pretty")
    pub fn from_env() -> Result<Self, UnknownStorageBackend> {
        let storage = match env::var("ORDERS_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::DynamoDb,
        };

        Ok(Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "orders".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            storage,
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        })
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns a display string for the storage target.
    pub fn storage_display(&self) -> String {
        match (self.storage, &self.aws_endpoint_url) {
            (StorageBackend::Memory, _) => "in-memory".to_string(),
            (StorageBackend::DynamoDb, Some(url)) => {
                format!("Local DynamoDB ({url}, table: {})", self.table_name)
            }
            (StorageBackend::DynamoDb, None) => format!(
                "AWS DynamoDB (region: {}, table: {})",
                self.aws_region, self.table_name
            ),
        }
    }
}
