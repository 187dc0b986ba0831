//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims that satisfy the
//! record invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::ClaimId;
use domain_claims::Claim;

/// Strategy for a handful of real state names
pub fn state_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Jharkhand"),
        Just("Odisha"),
        Just("Madhya Pradesh"),
        Just("Chhattisgarh"),
        Just("Maharashtra"),
    ]
}

/// Strategy for `"<State>, <District>"` locations, occasionally empty
pub fn location_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => (state_strategy(), "[A-Z][a-z]{3,9}")
            .prop_map(|(state, district)| format!("{}, {}", state, district)),
        1 => Just(String::new()),
    ]
}

/// Strategy for conventional statuses
pub fn status_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Approved"), Just("Pending"), Just("Rejected")]
}

/// Strategy for finite areas in hectares
pub fn area_strategy() -> impl Strategy<Value = f64> {
    (1u32..100_000u32).prop_map(|n| f64::from(n) / 100.0)
}

/// Strategy for submission dates within 2020..=2025
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2025, 1u32..=12, 1u32..=28)
        .prop_filter_map("valid date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

/// Strategy for ids of the form `FRA<year><seq>`
pub fn claim_id_strategy(year: i32) -> impl Strategy<Value = ClaimId> {
    (1u64..100_000u64).prop_map(move |seq| ClaimId::for_sequence(year, seq))
}

/// Strategy for a full valid claim with the given id
pub fn claim_strategy(id: ClaimId) -> impl Strategy<Value = Claim> {
    (
        "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}",
        location_strategy(),
        area_strategy(),
        status_strategy(),
        date_strategy(),
    )
        .prop_map(move |(name, location, area, status, date)| Claim {
            id: id.clone(),
            claimant_name: name,
            location,
            area,
            status: status.to_string(),
            date_submitted: date,
            remarks: String::new(),
        })
}

/// Strategy for up to `max` claims with distinct sequential ids
pub fn claims_strategy(max: usize) -> impl Strategy<Value = Vec<Claim>> {
    proptest::collection::vec(claim_strategy(ClaimId::from("placeholder")), 0..=max).prop_map(
        |claims| {
            claims
                .into_iter()
                .enumerate()
                .map(|(n, claim)| Claim {
                    id: ClaimId::for_sequence(2024, n as u64 + 1),
                    ..claim
                })
                .collect()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::stats::state_of;

    proptest! {
        #[test]
        fn generated_areas_are_finite(area in area_strategy()) {
            prop_assert!(area.is_finite() && area > 0.0);
        }

        #[test]
        fn generated_locations_have_known_state(location in location_strategy()) {
            let state = state_of(&location);
            prop_assert!(
                ["Jharkhand", "Odisha", "Madhya Pradesh", "Chhattisgarh", "Maharashtra", "Unknown"]
                    .contains(&state)
            );
        }

        #[test]
        fn generated_claim_ids_are_unique(claims in claims_strategy(20)) {
            let mut ids: Vec<_> = claims.iter().map(|c| c.id.clone()).collect();
            ids.dedup();
            prop_assert_eq!(ids.len(), claims.len());
        }
    }
}
