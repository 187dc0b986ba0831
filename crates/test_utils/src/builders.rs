//! Test Data Builders
//!
//! Provides a builder for claims with randomized but valid defaults. Tests
//! set only the fields they assert on.

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus};

use crate::fixtures::DateFixtures;

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    claimant_name: String,
    location: String,
    area: f64,
    status: String,
    date_submitted: NaiveDate,
    remarks: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with a random name and area
    pub fn new() -> Self {
        let sequence: u64 = (1..10_000u64).fake();
        let hundredths: u32 = (10..1_000u32).fake();
        Self {
            id: ClaimId::for_sequence(2024, sequence),
            claimant_name: Name().fake(),
            location: "Odisha, Koraput".to_string(),
            area: f64::from(hundredths) / 100.0,
            status: ClaimStatus::Pending.to_string(),
            date_submitted: DateFixtures::start_of_year(),
            remarks: String::new(),
        }
    }

    /// Sets the claim id
    pub fn with_id(mut self, id: impl Into<ClaimId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the id to the given sequence within 2024
    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.id = ClaimId::for_sequence(2024, sequence);
        self
    }

    /// Sets the claimant name
    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = name.into();
        self
    }

    /// Sets the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the area in hectares
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    /// Sets the status to a conventional value
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status.to_string();
        self
    }

    /// Sets the status to an arbitrary string
    pub fn with_raw_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the submission date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date_submitted = date;
        self
    }

    /// Sets the remarks
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            claimant_name: self.claimant_name,
            location: self.location,
            area: self.area,
            status: self.status,
            date_submitted: self.date_submitted,
            remarks: self.remarks,
        }
    }
}

/// Builds `count` pending claims with sequential 2024 ids starting at 1
pub fn sequential_claims(count: u64) -> Vec<Claim> {
    (1..=count)
        .map(|n| TestClaimBuilder::new().with_sequence(n).build())
        .collect()
}
