//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `OrderRepository`
//! using `aws-sdk-dynamodb`. Items live in a single table keyed by
//! `PK` (`ORDER#<id>`) and `SK` (`USER#<id>`).

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
