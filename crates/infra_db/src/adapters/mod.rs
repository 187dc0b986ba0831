//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_db::adapters::PostgresClaimsAdapter;
//! use domain_claims::{ClaimsPort, ClaimsService};
//!
//! let port: Arc<dyn ClaimsPort> = Arc::new(PostgresClaimsAdapter::new(pool));
//! let service = ClaimsService::new(port);
//! ```

pub mod claims;

pub use claims::PostgresClaimsAdapter;
