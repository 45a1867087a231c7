//! In-memory storage backend.
//!
//! Stores order items in a `BTreeMap` keyed by `(PK, SK)` behind a
//! `tokio::sync::RwLock`, reproducing the store semantics the handlers rely
//! on: unconditional puts, upserting updates and idempotent deletes. Useful
//! for tests and for running the service without AWS.
//!
//! # Example
//!
//! ```rust,ignore
//! use orders::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
