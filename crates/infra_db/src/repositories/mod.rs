//! Repository implementations
//!
//! Repositories encapsulate SQL and map between database rows and domain
//! types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Runtime-checked queries, so the crate builds without a live database
//! - Dynamic clauses assembled with `QueryBuilder` and bound parameters only
//! - Transactions with row locks for read-modify-write operations

pub mod claims;

pub use claims::{ClaimRow, ClaimsRepository};
