//! Claim search, sorting, and pagination
//!
//! A [`ClaimQuery`] is the normalized form of the list endpoint's query
//! string. Normalization never fails: unknown sort columns fall back to
//! `id`, unknown orders to ascending, and malformed or out-of-range page
//! numbers are coerced into range.
//!
//! Filters combine with AND:
//! - `search`: case-insensitive substring of the claimant name OR the id
//! - `status`: exact, case-sensitive equality
//! - `location`: case-sensitive substring
//!
//! Every sort is followed by `id` ascending so page boundaries are stable.

use std::cmp::Ordering;

use serde::Serialize;

use crate::claim::Claim;

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Largest page size a caller may request
pub const MAX_PER_PAGE: u32 = 100;

/// Sortable claim columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    ClaimantName,
    Location,
    Area,
    Status,
    DateSubmitted,
}

impl SortField {
    /// Parses a wire name, falling back to `Id` for anything unrecognized
    pub fn parse(raw: &str) -> Self {
        match raw {
            "id" => SortField::Id,
            "claimantName" => SortField::ClaimantName,
            "location" => SortField::Location,
            "area" => SortField::Area,
            "status" => SortField::Status,
            "dateSubmitted" => SortField::DateSubmitted,
            _ => SortField::Id,
        }
    }

    /// Column name in the claims table
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::ClaimantName => "claimant_name",
            SortField::Location => "location",
            SortField::Area => "area",
            SortField::Status => "status",
            SortField::DateSubmitted => "date_submitted",
        }
    }

    fn compare(&self, a: &Claim, b: &Claim) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::ClaimantName => a.claimant_name.cmp(&b.claimant_name),
            SortField::Location => a.location.cmp(&b.location),
            SortField::Area => a.area.total_cmp(&b.area),
            SortField::Status => a.status.cmp(&b.status),
            SortField::DateSubmitted => a.date_submitted.cmp(&b.date_submitted),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses `asc`/`desc` case-insensitively, falling back to `Asc`
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    /// SQL keyword for this direction
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Normalized list query
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ClaimQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            location: None,
            sort_by: SortField::Id,
            order: SortOrder::Asc,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ClaimQuery {
    /// Creates a query for the first page with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search; blank input clears it
    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.search = non_blank(q.into());
        self
    }

    /// Sets the exact status filter; blank input clears it
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = non_blank(status.into());
        self
    }

    /// Sets the location substring filter; blank input clears it
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    /// Sets the sort column and direction
    pub fn sort(mut self, sort_by: SortField, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }

    /// Sets page and page size, clamping both into range
    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.clamp(1, u32::MAX as i64) as u32;
        self.per_page = per_page.clamp(1, MAX_PER_PAGE as i64) as u32;
        self
    }

    /// Parses raw page inputs; non-numeric values use the defaults
    pub fn paginate_raw(self, page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = parse_number(page).unwrap_or(1);
        let per_page = parse_number(per_page).unwrap_or(DEFAULT_PER_PAGE as i64);
        self.paginate(page, per_page)
    }

    /// Rows to skip before the current page
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Maximum rows in the current page
    pub fn limit(&self) -> u64 {
        self.per_page as u64
    }

    /// Evaluates the filters against a single claim
    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(q) = &self.search {
            let q = q.to_lowercase();
            if !claim.claimant_name.to_lowercase().contains(&q)
                && !claim.id.as_str().to_lowercase().contains(&q)
            {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &claim.status != status {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !claim.location.contains(location.as_str()) {
                return false;
            }
        }
        true
    }

    /// Orders two claims by the requested column, then by id
    pub fn compare(&self, a: &Claim, b: &Claim) -> Ordering {
        let primary = match self.order {
            SortOrder::Asc => self.sort_by.compare(a, b),
            SortOrder::Desc => self.sort_by.compare(b, a),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    /// Rows matching the filters, before pagination
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, query: &ClaimQuery, total: u64) -> Self {
        let per_page = query.per_page.max(1) as u64;
        Self {
            items,
            page: query.page,
            per_page: query.per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim).filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
}
