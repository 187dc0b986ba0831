//! Claim record
//!
//! A claim is a single land-rights record. Every field is stored in one row;
//! there are no child entities. Status is an open-ended string so that the
//! storage layer accepts values outside the conventional set, but the three
//! conventional values are named by [`ClaimStatus`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::ClaimId;
use crate::error::ClaimError;

/// Conventional claim statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    /// All conventional statuses in chart order
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Approved, ClaimStatus::Pending, ClaimStatus::Rejected];

    /// Returns the literal stored in the status column
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }

    /// Chart color used for this status
    pub fn color(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "#22c55e",
            ClaimStatus::Pending => "#f59e0b",
            ClaimStatus::Rejected => "#ef4444",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A land-rights claim record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Name of the claimant
    pub claimant_name: String,
    /// Free text of the form `"<State>, <District>"`
    pub location: String,
    /// Area in hectares
    pub area: f64,
    /// Status, conventionally one of [`ClaimStatus`]
    pub status: String,
    /// Submission date
    pub date_submitted: NaiveDate,
    /// Free-text remarks, empty when none were given
    pub remarks: String,
}

impl Claim {
    /// Applies a partial update
    ///
    /// Only fields present in `update` change. The area is validated before
    /// anything is mutated, so an invalid area leaves the claim untouched.
    /// An unparseable submission date is ignored and the stored date kept.
    pub fn apply_update(&mut self, update: ClaimUpdate) -> Result<(), ClaimError> {
        let area = update.area.as_ref().map(AreaInput::parse).transpose()?;

        if let Some(name) = update.claimant_name {
            self.claimant_name = name.trim().to_string();
        }
        if let Some(location) = update.location {
            self.location = location.trim().to_string();
        }
        if let Some(area) = area {
            self.area = area;
        }
        if let Some(status) = update.status {
            self.status = status.trim().to_string();
        }
        if let Some(raw) = update.date_submitted {
            match raw.parse() {
                Some(date) => self.date_submitted = date,
                None => debug!(claim_id = %self.id, value = ?raw, "Ignoring unparseable dateSubmitted"),
            }
        }
        if let Some(remarks) = update.remarks {
            self.remarks = remarks.trim().to_string();
        }
        Ok(())
    }

    /// Returns true when the status equals `status` exactly
    pub fn has_status(&self, status: ClaimStatus) -> bool {
        self.status == status.as_str()
    }
}

/// Area as submitted by a client: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaInput {
    Number(f64),
    Text(String),
    /// Anything else (booleans, objects); never parses
    Other(serde_json::Value),
}

impl AreaInput {
    /// Parses the input into a finite number of hectares
    pub fn parse(&self) -> Result<f64, ClaimError> {
        let value = match self {
            AreaInput::Number(n) => Some(*n),
            AreaInput::Text(s) => s.trim().parse::<f64>().ok(),
            AreaInput::Other(_) => None,
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| ClaimError::validation("Invalid area"))
    }
}

impl From<f64> for AreaInput {
    fn from(value: f64) -> Self {
        AreaInput::Number(value)
    }
}

/// Submission date as sent by a client
///
/// Only a string can hold a date. Any other JSON value is kept so the request
/// still deserializes, and it never parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Text(String),
    Other(serde_json::Value),
}

impl DateInput {
    pub fn parse(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Text(raw) => parse_submission_date(raw),
            DateInput::Other(_) => None,
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

/// Unvalidated create request
#[derive(Debug, Clone, Default)]
pub struct ClaimSubmission {
    pub id: Option<String>,
    pub claimant_name: Option<String>,
    pub location: Option<String>,
    pub area: Option<AreaInput>,
    pub status: Option<String>,
    pub date_submitted: Option<DateInput>,
    pub remarks: Option<String>,
}

/// A validated create request
///
/// `id` is `None` when the server must assign one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub id: Option<ClaimId>,
    pub claimant_name: String,
    pub location: String,
    pub area: f64,
    pub status: String,
    pub date_submitted: NaiveDate,
    pub remarks: String,
}

impl NewClaim {
    /// Validates a submission
    ///
    /// `today` is used when the submission date is absent or unparseable.
    ///
    /// # Errors
    ///
    /// `ClaimError::Validation` when the area is missing or not a number, or
    /// when the claimant name or location is blank.
    pub fn from_submission(submission: ClaimSubmission, today: NaiveDate) -> Result<Self, ClaimError> {
        let claimant_name = trimmed(submission.claimant_name);
        let location = trimmed(submission.location);

        let area = submission
            .area
            .as_ref()
            .ok_or_else(|| ClaimError::validation("Invalid area"))?
            .parse()?;

        if claimant_name.is_empty() || location.is_empty() {
            return Err(ClaimError::validation("Missing claimantName or location"));
        }

        let status = Some(trimmed(submission.status))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ClaimStatus::default().as_str().to_string());

        let date_submitted = submission
            .date_submitted
            .as_ref()
            .and_then(DateInput::parse)
            .unwrap_or(today);

        let id = submission
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ClaimId::from);

        Ok(Self {
            id,
            claimant_name,
            location,
            area,
            status,
            date_submitted,
            remarks: trimmed(submission.remarks),
        })
    }

    /// Year used to sequence a server-assigned identifier
    pub fn submission_year(&self) -> i32 {
        use chrono::Datelike;
        self.date_submitted.year()
    }

    /// Materializes the record under its final identifier
    pub fn into_claim(self, id: ClaimId) -> Claim {
        Claim {
            id,
            claimant_name: self.claimant_name,
            location: self.location,
            area: self.area,
            status: self.status,
            date_submitted: self.date_submitted,
            remarks: self.remarks,
        }
    }
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ClaimUpdate {
    pub claimant_name: Option<String>,
    pub location: Option<String>,
    pub area: Option<AreaInput>,
    pub status: Option<String>,
    pub date_submitted: Option<DateInput>,
    pub remarks: Option<String>,
}

impl ClaimUpdate {
    pub fn is_empty(&self) -> bool {
        self.claimant_name.is_none()
            && self.location.is_none()
            && self.area.is_none()
            && self.status.is_none()
            && self.date_submitted.is_none()
            && self.remarks.is_none()
    }
}

const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parses an ISO-8601 calendar date, also accepting a date-time and keeping
/// its date part
///
/// Offsets are accepted but not applied: `2024-09-15T23:30:00-05:00` is
/// still the 15th.
pub fn parse_submission_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            OFFSET_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date_naive())
        })
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}
