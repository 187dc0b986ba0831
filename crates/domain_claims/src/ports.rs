//! Claims Domain Ports
//!
//! This module defines the storage interface of the claims domain, enabling
//! swappable implementations (PostgreSQL, in-memory mock).
//!
//! # Architecture
//!
//! The `ClaimsPort` trait defines every operation the domain needs from the
//! record store. Adapters:
//!
//! - **Internal Adapter**: PostgreSQL (`infra_db::PostgresClaimsAdapter`)
//! - **Mock Adapter**: in memory, for tests (`mock` feature)
//!
//! # Consistency
//!
//! The store is the only consistency boundary. `insert_claim` must reject a
//! duplicate id with `PortError::Conflict` rather than overwrite, and
//! `update_claim` must apply the partial update atomically with respect to
//! other writers of the same row.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::{Claim, ClaimUpdate};
use crate::query::{ClaimQuery, Page};
use crate::stats::StatusCounts;

/// Record store for claims
#[async_trait]
pub trait ClaimsPort: DomainPort + HealthCheckable {
    /// Inserts a claim under its id
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when the id already exists
    async fn insert_claim(&self, claim: Claim) -> Result<Claim, PortError>;

    /// Fetches one claim
    async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError>;

    /// Applies a partial update and returns the stored result
    async fn update_claim(&self, id: &ClaimId, update: ClaimUpdate) -> Result<Claim, PortError>;

    /// Hard-deletes a claim
    async fn delete_claim(&self, id: &ClaimId) -> Result<(), PortError>;

    /// Runs a filtered, sorted, paginated query
    async fn list_claims(&self, query: &ClaimQuery) -> Result<Page<Claim>, PortError>;

    /// Most recent claims by submission date, newest first
    async fn recent_claims(&self, limit: u32) -> Result<Vec<Claim>, PortError>;

    /// Counts rows by status
    async fn count_by_status(&self) -> Result<StatusCounts, PortError>;

    /// Every stored location, in id order
    async fn list_locations(&self) -> Result<Vec<String>, PortError>;

    /// Every id starting with `prefix`
    async fn ids_with_prefix(&self, prefix: &str) -> Result<Vec<ClaimId>, PortError>;
}

/// Mock implementation of ClaimsPort for testing
///
/// This adapter stores claims in memory and is useful for unit testing
/// without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of ClaimsPort
    #[derive(Debug, Default, Clone)]
    pub struct MockClaimsPort {
        claims: Arc<RwLock<BTreeMap<ClaimId, Claim>>>,
    }

    impl MockClaimsPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with claims for testing
        pub async fn with_claims(claims: Vec<Claim>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.claims.write().await;
                for claim in claims {
                    stored.insert(claim.id.clone(), claim);
                }
            }
            port
        }

        /// Number of stored claims
        pub async fn len(&self) -> usize {
            self.claims.read().await.len()
        }

        /// Returns true when nothing is stored
        pub async fn is_empty(&self) -> bool {
            self.claims.read().await.is_empty()
        }
    }

    impl DomainPort for MockClaimsPort {}

    #[async_trait]
    impl HealthCheckable for MockClaimsPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-claims-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ClaimsPort for MockClaimsPort {
        async fn insert_claim(&self, claim: Claim) -> Result<Claim, PortError> {
            let mut claims = self.claims.write().await;
            if claims.contains_key(&claim.id) {
                return Err(PortError::conflict(format!("Claim id {} already exists", claim.id)));
            }
            claims.insert(claim.id.clone(), claim.clone());
            Ok(claim)
        }

        async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError> {
            self.claims
                .read()
                .await
                .get(id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Claim", id))
        }

        async fn update_claim(&self, id: &ClaimId, update: ClaimUpdate) -> Result<Claim, PortError> {
            let mut claims = self.claims.write().await;
            let claim = claims
                .get_mut(id)
                .ok_or_else(|| PortError::not_found("Claim", id))?;
            claim.apply_update(update)?;
            Ok(claim.clone())
        }

        async fn delete_claim(&self, id: &ClaimId) -> Result<(), PortError> {
            self.claims
                .write()
                .await
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Claim", id))
        }

        async fn list_claims(&self, query: &ClaimQuery) -> Result<Page<Claim>, PortError> {
            let claims = self.claims.read().await;
            let mut matched: Vec<&Claim> = claims.values().filter(|c| query.matches(c)).collect();
            matched.sort_by(|a, b| query.compare(a, b));

            let total = matched.len() as u64;
            let items = matched
                .into_iter()
                .skip(query.offset() as usize)
                .take(query.limit() as usize)
                .cloned()
                .collect();

            Ok(Page::new(items, query, total))
        }

        async fn recent_claims(&self, limit: u32) -> Result<Vec<Claim>, PortError> {
            let claims = self.claims.read().await;
            let mut recent: Vec<Claim> = claims.values().cloned().collect();
            recent.sort_by(|a, b| {
                b.date_submitted
                    .cmp(&a.date_submitted)
                    .then_with(|| b.id.cmp(&a.id))
            });
            recent.truncate(limit as usize);
            Ok(recent)
        }

        async fn count_by_status(&self) -> Result<StatusCounts, PortError> {
            let claims = self.claims.read().await;
            let mut counts = StatusCounts::default();
            for claim in claims.values() {
                counts.record(&claim.status);
            }
            Ok(counts)
        }

        async fn list_locations(&self) -> Result<Vec<String>, PortError> {
            Ok(self
                .claims
                .read()
                .await
                .values()
                .map(|c| c.location.clone())
                .collect())
        }

        async fn ids_with_prefix(&self, prefix: &str) -> Result<Vec<ClaimId>, PortError> {
            Ok(self
                .claims
                .read()
                .await
                .keys()
                .filter(|id| id.as_str().starts_with(prefix))
                .cloned()
                .collect())
        }
    }
}
