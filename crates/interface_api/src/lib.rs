//! HTTP API Layer
//!
//! This crate provides the REST API for the FRA claims record store using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: claims CRUD and search, aggregates, static content, health
//! - **Middleware**: request ids, tracing, request logging, CORS
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: `{error, message}` JSON bodies for every failure
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use interface_api::{create_router, config::ApiConfig};
//! use domain_claims::ClaimsService;
//!
//! let service = ClaimsService::new(Arc::new(adapter));
//! let app = create_router(service, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimsService;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{claims, content, dashboard, health};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: ClaimsService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `claims` - Claims service over the configured store
/// * `config` - API configuration
pub fn create_router(claims: ClaimsService, config: ApiConfig) -> Router {
    let state = AppState { claims, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route(
            "/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        );

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .route("/stats", get(dashboard::get_stats))
        .route("/chart-data", get(dashboard::get_chart_data))
        .route("/data", get(dashboard::get_dashboard))
        .route("/faq", get(content::get_faq))
        .route("/team", get(content::get_team))
        .route("/contact", post(content::submit_contact))
        .route("/status", get(health::api_status))
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
