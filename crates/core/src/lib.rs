//! Functional core for the orders service.
//!
//! Pure types and functions shared by the HTTP shell: the order record, key
//! builders, request payloads, and the repository contract every storage
//! backend implements. Nothing in this crate performs I/O.

pub mod order;
pub mod storage;
