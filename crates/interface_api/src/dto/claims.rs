//! Claims DTOs

use serde::{Deserialize, Serialize};

use domain_claims::{
    AreaInput, ClaimQuery, ClaimSubmission, ClaimUpdate, DateInput, SortField, SortOrder,
};

/// Body of `POST /api/claims`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub id: Option<String>,
    pub claimant_name: Option<String>,
    pub location: Option<String>,
    pub area: Option<AreaInput>,
    pub status: Option<String>,
    pub date_submitted: Option<DateInput>,
    pub remarks: Option<String>,
}

impl From<CreateClaimRequest> for ClaimSubmission {
    fn from(request: CreateClaimRequest) -> Self {
        ClaimSubmission {
            id: request.id,
            claimant_name: request.claimant_name,
            location: request.location,
            area: request.area,
            status: request.status,
            date_submitted: request.date_submitted,
            remarks: request.remarks,
        }
    }
}

/// Body of `PUT /api/claims/{id}`; an `id` field is ignored
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimRequest {
    pub claimant_name: Option<String>,
    pub location: Option<String>,
    pub area: Option<AreaInput>,
    pub status: Option<String>,
    pub date_submitted: Option<DateInput>,
    pub remarks: Option<String>,
}

impl From<UpdateClaimRequest> for ClaimUpdate {
    fn from(request: UpdateClaimRequest) -> Self {
        ClaimUpdate {
            claimant_name: request.claimant_name,
            location: request.location,
            area: request.area,
            status: request.status,
            date_submitted: request.date_submitted,
            remarks: request.remarks,
        }
    }
}

/// Query string of `GET /api/claims`
///
/// Built from raw key/value pairs so that no query string is rejected:
/// every field is text, unknown keys are skipped, and the first occurrence
/// of a repeated key wins.
#[derive(Debug, Default)]
pub struct ListClaimsParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl FromIterator<(String, String)> for ListClaimsParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "status" => &mut params.status,
                "location" => &mut params.location,
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                "sort_by" => &mut params.sort_by,
                "order" => &mut params.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl ListClaimsParams {
    pub fn into_query(self) -> ClaimQuery {
        let sort_by = self.sort_by.as_deref().map(SortField::parse).unwrap_or_default();
        let order = self.order.as_deref().map(SortOrder::parse).unwrap_or_default();

        let mut query = ClaimQuery::new()
            .sort(sort_by, order)
            .paginate_raw(self.page.as_deref(), self.per_page.as_deref());
        if let Some(q) = self.q {
            query = query.search(q);
        }
        if let Some(status) = self.status {
            query = query.status(status);
        }
        if let Some(location) = self.location {
            query = query.location(location);
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
    pub id: String,
}

impl DeleteResponse {
    pub fn deleted(id: impl Into<String>) -> Self {
        Self {
            status: "deleted",
            id: id.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub received: serde_json::Value,
}

impl ContactResponse {
    pub fn acknowledge(received: serde_json::Value) -> Self {
        Self {
            status: "ok",
            message: "Thanks for reaching out!",
            received,
        }
    }
}
