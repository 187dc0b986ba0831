//! Claims handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;
use domain_claims::{Claim, Page};

use crate::dto::claims::*;
use crate::extract::{ApiJson, ApiQuery};
use crate::{error::ApiError, AppState};

/// Lists claims with search, filters, sort, and pagination
pub async fn list_claims(
    State(state): State<AppState>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> Result<Json<Page<Claim>>, ApiError> {
    let params: ListClaimsParams = pairs.into_iter().collect();
    let page = state.claims.list(&params.into_query()).await?;
    Ok(Json(page))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    let claim = state.claims.get(&ClaimId::new(id)).await?;
    Ok(Json(claim))
}

/// Creates a claim
pub async fn create_claim(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateClaimRequest>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    let claim = state.claims.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(claim)))
}

/// Applies a partial update
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateClaimRequest>,
) -> Result<Json<Claim>, ApiError> {
    let claim = state.claims.update(&ClaimId::new(id), request.into()).await?;
    Ok(Json(claim))
}

/// Deletes a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = ClaimId::new(id);
    state.claims.delete(&id).await?;
    Ok(Json(DeleteResponse::deleted(id)))
}
