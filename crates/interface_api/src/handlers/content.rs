//! Static content and contact handlers

use axum::{body::Bytes, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use domain_claims::content::{FaqEntry, TeamMember, FAQ, TEAM};

use crate::dto::claims::ContactResponse;

pub async fn get_faq() -> Json<&'static [FaqEntry]> {
    Json(FAQ)
}

pub async fn get_team() -> Json<&'static [TeamMember]> {
    Json(TEAM)
}

/// Echoes the submitted JSON; a missing, null, or unparseable body echoes `{}`
pub async fn submit_contact(body: Bytes) -> (StatusCode, Json<ContactResponse>) {
    let received = serde_json::from_slice::<Value>(&body)
        .ok()
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| Value::Object(Default::default()));

    info!(bytes = body.len(), "Contact message received");
    (StatusCode::CREATED, Json(ContactResponse::acknowledge(received)))
}
