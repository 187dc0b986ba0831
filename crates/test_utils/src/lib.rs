//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FRA claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and request bodies
//! - `builders`: Builder for claims with randomized defaults
//! - `database`: PostgreSQL testcontainer harness
//! - `assertions`: Assertion helpers for claims and pages
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
