//! Claims application service
//!
//! `ClaimsService` is the single entry point used by the HTTP surface. It
//! owns no state beyond the injected [`ClaimsPort`], so one instance is
//! cloned into every request handler.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use core_kernel::{ClaimId, HealthCheckResult};

use crate::claim::{Claim, ClaimSubmission, ClaimUpdate, NewClaim};
use crate::content::{self, AiInsight, FaqEntry, TeamMember};
use crate::error::ClaimError;
use crate::id_generator::next_claim_id;
use crate::ports::ClaimsPort;
use crate::query::{ClaimQuery, Page};
use crate::stats::{group_by_state, ChartData, ClaimStats};

/// Number of claims included in the composite dashboard payload
pub const RECENT_CLAIMS_LIMIT: u32 = 50;

/// Composite payload for the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub claims_stats: ClaimStats,
    pub recent_claims: Vec<Claim>,
    pub chart_data: ChartData,
    pub ai_insights: &'static [AiInsight],
    pub faq_data: &'static [FaqEntry],
    pub team_members: &'static [TeamMember],
}

/// Service orchestrating claim queries, aggregation, and CRUD
#[derive(Clone)]
pub struct ClaimsService {
    port: Arc<dyn ClaimsPort>,
}

impl ClaimsService {
    pub fn new(port: Arc<dyn ClaimsPort>) -> Self {
        Self { port }
    }

    /// Filtered, sorted, paginated listing
    #[instrument(skip(self))]
    pub async fn list(&self, query: &ClaimQuery) -> Result<Page<Claim>, ClaimError> {
        Ok(self.port.list_claims(query).await?)
    }

    /// Fetches one claim
    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn get(&self, id: &ClaimId) -> Result<Claim, ClaimError> {
        Ok(self.port.get_claim(id).await?)
    }

    /// Validates and stores a new claim, assigning an id when none was given
    pub async fn create(&self, submission: ClaimSubmission) -> Result<Claim, ClaimError> {
        self.create_on(submission, Utc::now().date_naive()).await
    }

    /// As [`create`](Self::create), with an explicit "today" for defaults
    #[instrument(skip(self, submission))]
    pub async fn create_on(
        &self,
        submission: ClaimSubmission,
        today: NaiveDate,
    ) -> Result<Claim, ClaimError> {
        let new_claim = NewClaim::from_submission(submission, today)?;

        let id = match new_claim.id.clone() {
            Some(id) => id,
            None => self.next_id(new_claim.submission_year()).await?,
        };

        let claim = self.port.insert_claim(new_claim.into_claim(id)).await.map_err(|err| {
            if err.is_conflict() {
                warn!(error = %err, "Claim id collision on create");
            }
            ClaimError::from(err)
        })?;

        info!(claim_id = %claim.id, "Claim created");
        Ok(claim)
    }

    /// Applies a partial update
    #[instrument(skip(self, update), fields(claim_id = %id))]
    pub async fn update(&self, id: &ClaimId, update: ClaimUpdate) -> Result<Claim, ClaimError> {
        if update.is_empty() {
            debug!("Empty update, returning stored claim");
            return self.get(id).await;
        }
        let claim = self.port.update_claim(id, update).await?;
        info!("Claim updated");
        Ok(claim)
    }

    /// Hard-deletes a claim
    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn delete(&self, id: &ClaimId) -> Result<(), ClaimError> {
        self.port.delete_claim(id).await?;
        info!("Claim deleted");
        Ok(())
    }

    /// Next server-assigned id for `year`
    #[instrument(skip(self))]
    pub async fn next_id(&self, year: i32) -> Result<ClaimId, ClaimError> {
        let existing = self.port.ids_with_prefix(&ClaimId::year_prefix(year)).await?;
        let id = next_claim_id(year, &existing);
        debug!(claim_id = %id, scanned = existing.len(), "Generated claim id");
        Ok(id)
    }

    /// Counts by status with the fixed trend figures
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<ClaimStats, ClaimError> {
        Ok(self.port.count_by_status().await?.into())
    }

    /// Status breakdown, static trend series, and per-state counts
    #[instrument(skip(self))]
    pub async fn chart_data(&self) -> Result<ChartData, ClaimError> {
        let counts = self.port.count_by_status().await?;
        let locations = self.port.list_locations().await?;
        Ok(ChartData::new(&counts, group_by_state(&locations)))
    }

    /// Stats, recent claims, chart data, and the static content in one payload
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardData, ClaimError> {
        let claims_stats = self.stats().await?;
        let recent_claims = self.port.recent_claims(RECENT_CLAIMS_LIMIT).await?;
        let chart_data = self.chart_data().await?;

        Ok(DashboardData {
            claims_stats,
            recent_claims,
            chart_data,
            ai_insights: content::AI_INSIGHTS,
            faq_data: content::FAQ,
            team_members: content::TEAM,
        })
    }

    /// Inserts `claims` when the store holds no records
    ///
    /// Returns the number of claims inserted.
    #[instrument(skip(self, claims), fields(count = claims.len()))]
    pub async fn seed_if_empty(&self, claims: Vec<Claim>) -> Result<usize, ClaimError> {
        if self.port.count_by_status().await?.total > 0 {
            debug!("Store already populated, skipping seed");
            return Ok(0);
        }
        let mut inserted = 0;
        for claim in claims {
            match self.port.insert_claim(claim).await {
                Ok(_) => inserted += 1,
                Err(err) if err.is_conflict() => continue,
                Err(err) => return Err(err.into()),
            }
        }
        info!(inserted, "Seeded demo claims");
        Ok(inserted)
    }

    /// Health of the underlying store
    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::AreaInput;
    use crate::content::demo_claims;
    use crate::ports::mock::MockClaimsPort;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    fn submission(name: &str) -> ClaimSubmission {
        ClaimSubmission {
            claimant_name: Some(name.to_string()),
            location: Some("Odisha, Koraput".to_string()),
            area: Some(AreaInput::Number(1.2)),
            date_submitted: Some("2024-03-04".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_after_legacy_seeds() {
        let service = ClaimsService::new(Arc::new(MockClaimsPort::with_claims(demo_claims()).await));
        let claim = service.create_on(submission("Lakshmi"), today()).await.unwrap();
        assert_eq!(claim.id.as_str(), "FRA20240006");
    }

    #[tokio::test]
    async fn test_create_with_taken_client_id_conflicts() {
        let service = ClaimsService::new(Arc::new(MockClaimsPort::with_claims(demo_claims()).await));
        let mut s = submission("Lakshmi");
        s.id = Some("FRA2024001".to_string());
        let err = service.create_on(s, today()).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let service = ClaimsService::new(Arc::new(MockClaimsPort::new()));
        assert_eq!(service.seed_if_empty(demo_claims()).await.unwrap(), 5);
        assert_eq!(service.seed_if_empty(demo_claims()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_update_of_missing_claim_is_not_found() {
        let service = ClaimsService::new(Arc::new(MockClaimsPort::new()));
        let err = service
            .update(&ClaimId::from("FRA20240001"), ClaimUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
