//! PostgreSQL Claims Adapter
//!
//! This module provides the database adapter for the claims domain,
//! implementing the `ClaimsPort` trait over the `ClaimsRepository`.
//!
//! Database errors are translated to `PortError` variants:
//! - `DatabaseError::NotFound` -> `PortError::NotFound`
//! - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
//! - connection and pool errors -> `PortError::Connection`
//! - Other errors -> `PortError::Internal`

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_claims::{Claim, ClaimQuery, ClaimUpdate, ClaimsPort, Page, StatusCounts};

use crate::repositories::claims::{ClaimRow, ClaimsRepository};

const ADAPTER_ID: &str = "postgres-claims-adapter";

/// PostgreSQL-backed implementation of the ClaimsPort trait
#[derive(Debug, Clone)]
pub struct PostgresClaimsAdapter {
    repository: ClaimsRepository,
    pool: PgPool,
}

impl PostgresClaimsAdapter {
    /// Creates a new PostgreSQL claims adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClaimsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &ClaimsRepository {
        &self.repository
    }
}

impl DomainPort for PostgresClaimsAdapter {}

#[async_trait]
impl HealthCheckable for PostgresClaimsAdapter {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimsPort for PostgresClaimsAdapter {
    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn insert_claim(&self, claim: Claim) -> Result<Claim, PortError> {
        let row = self.repository.insert(ClaimRow::from(claim)).await?;
        Ok(row.into())
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError> {
        let row = self.repository.get_by_id(id.as_str()).await?;
        Ok(row.into())
    }

    #[instrument(skip(self, update), fields(claim_id = %id))]
    async fn update_claim(&self, id: &ClaimId, update: ClaimUpdate) -> Result<Claim, PortError> {
        let row = self
            .repository
            .update(id.as_str(), |row| -> Result<ClaimRow, PortError> {
                let mut claim = Claim::from(row);
                claim.apply_update(update)?;
                Ok(claim.into())
            })
            .await?;
        Ok(row.into())
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn delete_claim(&self, id: &ClaimId) -> Result<(), PortError> {
        self.repository.delete(id.as_str()).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_claims(&self, query: &ClaimQuery) -> Result<Page<Claim>, PortError> {
        let (rows, total) = self.repository.find(query).await?;
        debug!(returned = rows.len(), total, "Listed claims");
        let items = rows.into_iter().map(Claim::from).collect();
        Ok(Page::new(items, query, total))
    }

    async fn recent_claims(&self, limit: u32) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.recent(limit).await?;
        Ok(rows.into_iter().map(Claim::from).collect())
    }

    async fn count_by_status(&self) -> Result<StatusCounts, PortError> {
        Ok(self.repository.count_by_status().await?)
    }

    async fn list_locations(&self) -> Result<Vec<String>, PortError> {
        Ok(self.repository.locations().await?)
    }

    async fn ids_with_prefix(&self, prefix: &str) -> Result<Vec<ClaimId>, PortError> {
        let ids = self.repository.ids_with_prefix(prefix).await?;
        Ok(ids.into_iter().map(ClaimId::new).collect())
    }
}
