//! Claim identifier sequencing
//!
//! The next identifier for a year is one past the largest sequence found
//! among existing identifiers with that year's prefix. Identifiers whose
//! suffix is not an integer are skipped.
//!
//! Generation reads, computes, then writes without isolation. Two creates
//! for the same year can compute the same identifier; the store's primary
//! key turns the second insert into a `Conflict`, which is reported to the
//! caller as-is.

use core_kernel::ClaimId;

/// Computes the next identifier for `year` from the existing identifiers
///
/// ```rust
/// use core_kernel::ClaimId;
/// use domain_claims::id_generator::next_claim_id;
///
/// let existing = [ClaimId::from("FRA20240001"), ClaimId::from("FRA20240005")];
/// assert_eq!(next_claim_id(2024, &existing).as_str(), "FRA20240006");
/// ```
pub fn next_claim_id<'a, I>(year: i32, existing: I) -> ClaimId
where
    I: IntoIterator<Item = &'a ClaimId>,
{
    let max_sequence = existing
        .into_iter()
        .filter_map(|id| id.sequence_for_year(year))
        .max()
        .unwrap_or(0);

    ClaimId::for_sequence(year, max_sequence.saturating_add(1))
}
