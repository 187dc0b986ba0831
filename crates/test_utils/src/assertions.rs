//! Custom Test Assertions
//!
//! Assertion helpers for claims and pages that give more meaningful failure
//! messages than bare `assert_eq!`.

use std::collections::HashSet;

use domain_claims::{Claim, Page};

/// Asserts that every field except `remarks` is unchanged
pub fn assert_same_except_remarks(actual: &Claim, before: &Claim) {
    assert_eq!(actual.id, before.id, "id changed");
    assert_eq!(actual.claimant_name, before.claimant_name, "claimantName changed");
    assert_eq!(actual.location, before.location, "location changed");
    assert_eq!(actual.area, before.area, "area changed");
    assert_eq!(actual.status, before.status, "status changed");
    assert_eq!(actual.date_submitted, before.date_submitted, "dateSubmitted changed");
}

/// Asserts that every item on the page has `status`
pub fn assert_all_have_status(page: &Page<Claim>, status: &str) {
    for claim in &page.items {
        assert_eq!(
            claim.status, status,
            "Claim {} has status {:?}, expected {:?}",
            claim.id, claim.status, status
        );
    }
}

/// Asserts that the pages share no claim id
pub fn assert_disjoint_pages(first: &Page<Claim>, second: &Page<Claim>) {
    let ids: HashSet<_> = first.items.iter().map(|c| &c.id).collect();
    for claim in &second.items {
        assert!(
            !ids.contains(&claim.id),
            "Claim {} appears on page {} and page {}",
            claim.id,
            first.page,
            second.page
        );
    }
}

/// Asserts the page metadata against an expected total
pub fn assert_page_meta(page: &Page<Claim>, total: u64, total_pages: u64) {
    assert_eq!(page.total, total, "total mismatch");
    assert_eq!(page.total_pages, total_pages, "total_pages mismatch");
    assert!(
        page.items.len() <= page.per_page as usize,
        "Page holds {} items but per_page is {}",
        page.items.len(),
        page.per_page
    );
}
