//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL side of the claims record store using
//! SQLx: connection pooling, the `claims` table bootstrap, the
//! `ClaimsRepository` holding all SQL, and the `PostgresClaimsAdapter` that
//! exposes it to the domain through `ClaimsPort`.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories speak rows and
//! `DatabaseError`; adapters translate those into domain types and
//! `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, ensure_schema, DatabaseConfig, PostgresClaimsAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/fra_atlas")).await?;
//! ensure_schema(&pool).await?;
//! let adapter = PostgresClaimsAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod schema;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use schema::{ensure_schema, CLAIMS_SCHEMA};
pub use repositories::ClaimsRepository;
pub use adapters::PostgresClaimsAdapter;
