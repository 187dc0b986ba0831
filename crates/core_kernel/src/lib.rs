//! Core Kernel - Foundational types for the FRA claims system
//!
//! This crate provides the building blocks shared by every other crate:
//! - Claim identifiers and the `FRA<year><sequence>` grammar
//! - Port contracts and port errors for swappable storage adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{ClaimId, CLAIM_ID_PREFIX};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
