//! Pre-built Test Fixtures
//!
//! Consistent, predictable claims and request payloads for unit and API
//! tests.

use chrono::NaiveDate;
use serde_json::{json, Value};

use core_kernel::ClaimId;
use domain_claims::{AreaInput, Claim, ClaimSubmission};

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// An approved claim in Odisha
    pub fn approved() -> Claim {
        Claim {
            id: ClaimId::from("FRA20240001"),
            claimant_name: "Sunita Devi".to_string(),
            location: "Odisha, Koraput".to_string(),
            area: 1.8,
            status: "Approved".to_string(),
            date_submitted: DateFixtures::mid_september(),
            remarks: "All documents verified".to_string(),
        }
    }

    /// A pending claim in Jharkhand
    pub fn pending() -> Claim {
        Claim {
            id: ClaimId::from("FRA20240002"),
            claimant_name: "Ramesh Kumar".to_string(),
            location: "Jharkhand, Ranchi".to_string(),
            area: 2.5,
            status: "Pending".to_string(),
            date_submitted: DateFixtures::start_of_year(),
            remarks: String::new(),
        }
    }

    /// A rejected claim in Madhya Pradesh
    pub fn rejected() -> Claim {
        Claim {
            id: ClaimId::from("FRA20240003"),
            claimant_name: "Arjun Singh".to_string(),
            location: "Madhya Pradesh, Balaghat".to_string(),
            area: 3.2,
            status: "Rejected".to_string(),
            date_submitted: DateFixtures::start_of_year(),
            remarks: "Insufficient evidence".to_string(),
        }
    }

    /// One claim of each conventional status
    pub fn mixed() -> Vec<Claim> {
        vec![Self::approved(), Self::pending(), Self::rejected()]
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// January 1, 2024
    pub fn start_of_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    /// September 15, 2024
    pub fn mid_september() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).expect("valid date")
    }
}

/// Fixture for create payloads
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    /// A complete submission without an id
    pub fn complete() -> ClaimSubmission {
        ClaimSubmission {
            id: None,
            claimant_name: Some("Lakshmi Gond".to_string()),
            location: Some("Chhattisgarh, Bastar".to_string()),
            area: Some(AreaInput::Number(2.25)),
            status: Some("Pending".to_string()),
            date_submitted: Some("2024-05-20".into()),
            remarks: Some("Gram Sabha resolution attached".to_string()),
        }
    }

    /// The same submission as a JSON request body
    pub fn complete_json() -> Value {
        json!({
            "claimantName": "Lakshmi Gond",
            "location": "Chhattisgarh, Bastar",
            "area": 2.25,
            "status": "Pending",
            "dateSubmitted": "2024-05-20",
            "remarks": "Gram Sabha resolution attached"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::DateInput;

    #[test]
    fn test_mixed_covers_each_status() {
        let statuses: Vec<_> = ClaimFixtures::mixed().into_iter().map(|c| c.status).collect();
        assert_eq!(statuses, vec!["Approved", "Pending", "Rejected"]);
    }

    #[test]
    fn test_submission_json_matches_struct() {
        let json = SubmissionFixtures::complete_json();
        let submission = SubmissionFixtures::complete();
        assert_eq!(json["claimantName"], submission.claimant_name.unwrap());
        assert_eq!(
            serde_json::from_value::<DateInput>(json["dateSubmitted"].clone()).unwrap(),
            submission.date_submitted.unwrap()
        );
    }
}
