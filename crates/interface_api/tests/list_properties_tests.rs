//! Property tests for claim listing
//!
//! Random claim sets are listed through the same query-string path the
//! `/api/claims` handler uses, over the in-memory port.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use core_kernel::ClaimId;
use domain_claims::id_generator::next_claim_id;
use domain_claims::ports::mock::MockClaimsPort;
use domain_claims::{Claim, ClaimsService, Page};
use interface_api::dto::claims::ListClaimsParams;
use test_utils::{
    assert_all_have_status, assert_disjoint_pages, assert_page_meta, claim_id_strategy,
    claims_strategy, state_strategy, status_strategy,
};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn params(pairs: &[(&str, String)]) -> ListClaimsParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Lists every page for `filters` and returns them in order
fn all_pages(claims: Vec<Claim>, filters: &[(&str, String)], per_page: u32) -> Vec<Page<Claim>> {
    runtime().block_on(async move {
        let service = ClaimsService::new(Arc::new(MockClaimsPort::with_claims(claims).await));
        let mut pages = Vec::new();
        let mut page = 1u32;
        loop {
            let mut pairs = filters.to_vec();
            pairs.push(("page", page.to_string()));
            pairs.push(("per_page", per_page.to_string()));
            let result = service.list(&params(&pairs).into_query()).await.unwrap();
            let last = u64::from(page) >= result.total_pages;
            pages.push(result);
            if last {
                break;
            }
            page += 1;
        }
        pages
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn status_filter_pages_partition_matching_claims(
        claims in claims_strategy(30),
        status in status_strategy(),
        per_page in 1u32..=12,
    ) {
        let expected: HashSet<ClaimId> = claims
            .iter()
            .filter(|c| c.status == status)
            .map(|c| c.id.clone())
            .collect();

        let pages = all_pages(claims, &[("status", status.to_string())], per_page);

        let total = expected.len() as u64;
        let total_pages = total.div_ceil(u64::from(per_page));
        let mut seen = HashSet::new();
        for (n, page) in pages.iter().enumerate() {
            assert_all_have_status(page, status);
            assert_page_meta(page, total, total_pages);
            for later in &pages[n + 1..] {
                assert_disjoint_pages(page, later);
            }
            seen.extend(page.items.iter().map(|c| c.id.clone()));
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn location_filter_is_substring_match(
        claims in claims_strategy(30),
        state in state_strategy(),
    ) {
        let expected = claims.iter().filter(|c| c.location.contains(state)).count() as u64;

        let pages = all_pages(claims, &[("location", state.to_string())], 100);

        prop_assert_eq!(pages.len(), 1);
        prop_assert_eq!(pages[0].total, expected);
        for claim in &pages[0].items {
            prop_assert!(claim.location.contains(state));
        }
    }

    #[test]
    fn area_descending_order_holds_across_pages(
        claims in claims_strategy(30),
        per_page in 1u32..=7,
    ) {
        let count = claims.len();
        let pages = all_pages(
            claims,
            &[("sort_by", "area".to_string()), ("order", "desc".to_string())],
            per_page,
        );

        let areas: Vec<f64> = pages.iter().flat_map(|p| p.items.iter().map(|c| c.area)).collect();
        prop_assert_eq!(areas.len(), count);
        for pair in areas.windows(2) {
            prop_assert!(pair[0] >= pair[1], "{} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn next_id_is_past_every_existing_sequence(
        ids in proptest::collection::vec(claim_id_strategy(2024), 0..20),
    ) {
        let next = next_claim_id(2024, &ids);
        let next_seq = next.sequence_for_year(2024).unwrap();
        for id in &ids {
            prop_assert!(id.sequence_for_year(2024).unwrap() < next_seq);
        }
        prop_assert!(!ids.contains(&next));
    }
}
