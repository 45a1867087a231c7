//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`OrderRepository`]
//! trait defined in `orders_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always available. The active backend is chosen
//! at startup from `ORDERS_STORAGE`.
//!
//! [`OrderRepository`]: orders_core::storage::OrderRepository

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;
