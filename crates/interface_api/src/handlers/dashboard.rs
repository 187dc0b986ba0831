//! Aggregate handlers

use axum::{extract::State, Json};

use domain_claims::{ChartData, ClaimStats, DashboardData};

use crate::{error::ApiError, AppState};

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<ClaimStats>, ApiError> {
    Ok(Json(state.claims.stats().await?))
}

pub async fn get_chart_data(State(state): State<AppState>) -> Result<Json<ChartData>, ApiError> {
    Ok(Json(state.claims.chart_data().await?))
}

/// Stats, recent claims, charts, and static content in one payload
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardData>, ApiError> {
    Ok(Json(state.claims.dashboard().await?))
}
