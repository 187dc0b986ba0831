//! Claims Domain
//!
//! This crate implements the land-rights claim records of the FRA atlas:
//! validation of submitted claims, the list query (search, filter, sort,
//! paginate), status and per-state aggregation, and the per-year identifier
//! sequence.
//!
//! # Flow
//!
//! ```text
//! HTTP -> ClaimsService -> ClaimsPort (read)
//! HTTP -> ClaimsService -> next_claim_id -> ClaimsPort (insert)
//! ```

pub mod claim;
pub mod query;
pub mod stats;
pub mod id_generator;
pub mod ports;
pub mod service;
pub mod content;
pub mod error;

pub use claim::{Claim, ClaimStatus, ClaimSubmission, ClaimUpdate, NewClaim, AreaInput, DateInput};
pub use query::{ClaimQuery, Page, SortField, SortOrder};
pub use stats::{ClaimStats, ChartData, StatusCounts, StateCount};
pub use ports::ClaimsPort;
pub use service::{ClaimsService, DashboardData};
pub use error::ClaimError;
