//! Claim identifiers
//!
//! Server-assigned claim identifiers follow the grammar
//! `FRA<year><sequence>`, where the sequence is zero-padded to at least four
//! digits (`FRA20240007`). Clients may also supply their own identifier on
//! create, so a `ClaimId` is any non-blank string; the grammar only matters
//! when deriving the next sequence for a year.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every server-assigned claim identifier
pub const CLAIM_ID_PREFIX: &str = "FRA";

/// Identifier of a claim record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    /// Wraps an identifier as-is; no grammar is enforced
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the identifier for `sequence` within `year`
    ///
    /// ```rust
    /// use core_kernel::ClaimId;
    ///
    /// assert_eq!(ClaimId::for_sequence(2024, 7).as_str(), "FRA20240007");
    /// ```
    pub fn for_sequence(year: i32, sequence: u64) -> Self {
        Self(format!("{}{:04}", Self::year_prefix(year), sequence))
    }

    /// Returns the prefix every identifier of `year` starts with
    pub fn year_prefix(year: i32) -> String {
        format!("{CLAIM_ID_PREFIX}{year}")
    }

    /// Parses the sequence number following the `year` prefix
    ///
    /// Returns `None` when the identifier belongs to another year or the
    /// suffix is not an unsigned integer. Legacy three-digit suffixes such as
    /// `FRA2024001` parse as sequence 1.
    pub fn sequence_for_year(&self, year: i32) -> Option<u64> {
        self.0
            .strip_prefix(&Self::year_prefix(year))
            .and_then(|suffix| suffix.trim().parse::<u64>().ok())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ClaimId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ClaimId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ClaimId> for String {
    fn from(id: ClaimId) -> String {
        id.0
    }
}

impl AsRef<str> for ClaimId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
