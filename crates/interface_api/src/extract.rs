//! Extractors whose rejections render as [`ApiError`]

use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::Json;

use crate::error::ApiError;

/// JSON body; malformed input becomes a 400 with the API error shape
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string; malformed input becomes a 400 with the API error shape
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
