//! Aggregate statistics and chart groupings
//!
//! Status counts and the per-state breakdown are derived from stored
//! records. The trend percentages and the monthly time series are fixed
//! demo values and are not computed from data.

use serde::Serialize;

use crate::claim::ClaimStatus;

/// Group key for claims whose location has no state part
pub const UNKNOWN_STATE: &str = "Unknown";

/// Row counts by status
///
/// Each status count is an exact, case-sensitive match on the literal
/// status string, so `total` may exceed the sum of the three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
}

impl StatusCounts {
    /// Count for one conventional status
    pub fn get(&self, status: ClaimStatus) -> u64 {
        match status {
            ClaimStatus::Approved => self.approved,
            ClaimStatus::Pending => self.pending,
            ClaimStatus::Rejected => self.rejected,
        }
    }

    /// Tallies one stored status value
    pub fn record(&mut self, status: &str) {
        self.total += 1;
        match status {
            s if s == ClaimStatus::Approved.as_str() => self.approved += 1,
            s if s == ClaimStatus::Pending.as_str() => self.pending += 1,
            s if s == ClaimStatus::Rejected.as_str() => self.rejected += 1,
            _ => {}
        }
    }
}

/// Fixed, illustrative period-over-period changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub total_change: &'static str,
    pub approved_change: &'static str,
    pub pending_change: &'static str,
    pub rejected_change: &'static str,
}

impl Default for Trends {
    fn default() -> Self {
        Self {
            total_change: "+12%",
            approved_change: "+8%",
            pending_change: "-15%",
            rejected_change: "+3%",
        }
    }
}

/// Response of the stats operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimStats {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
    pub trends: Trends,
}

impl From<StatusCounts> for ClaimStats {
    fn from(counts: StatusCounts) -> Self {
        Self {
            total: counts.total,
            approved: counts.approved,
            pending: counts.pending,
            rejected: counts.rejected,
            trends: Trends::default(),
        }
    }
}

/// One slice of the status pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub name: &'static str,
    pub value: u64,
    pub color: &'static str,
}

/// One month of the static trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub approved: u32,
    pub pending: u32,
    pub rejected: u32,
}

/// Number of claims in one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub claims: u64,
}

/// Response of the chart-data operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub claims_by_status: Vec<StatusSlice>,
    pub trends_over_time: Vec<MonthlyTrend>,
    pub claims_by_state: Vec<StateCount>,
}

impl ChartData {
    pub fn new(counts: &StatusCounts, claims_by_state: Vec<StateCount>) -> Self {
        let claims_by_status = ClaimStatus::ALL
            .iter()
            .map(|status| StatusSlice {
                name: status.as_str(),
                value: counts.get(*status),
                color: status.color(),
            })
            .collect();

        Self {
            claims_by_status,
            trends_over_time: demo_trends(),
            claims_by_state,
        }
    }
}

/// Returns the state part of a location: the text before the first comma,
/// trimmed, or [`UNKNOWN_STATE`] when that is empty
pub fn state_of(location: &str) -> &str {
    let state = location.split(',').next().unwrap_or_default().trim();
    if state.is_empty() {
        UNKNOWN_STATE
    } else {
        state
    }
}

/// Counts claims per state, listing states in order of first appearance
pub fn group_by_state<I, S>(locations: I) -> Vec<StateCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: Vec<StateCount> = Vec::new();
    for location in locations {
        let state = state_of(location.as_ref());
        match groups.iter_mut().find(|g| g.state == state) {
            Some(group) => group.claims += 1,
            None => groups.push(StateCount {
                state: state.to_string(),
                claims: 1,
            }),
        }
    }
    groups
}

fn demo_trends() -> Vec<MonthlyTrend> {
    [
        ("Jan", 650, 320, 180),
        ("Feb", 720, 290, 165),
        ("Mar", 890, 340, 195),
        ("Apr", 945, 380, 220),
        ("May", 1020, 420, 210),
        ("Jun", 1150, 390, 240),
    ]
    .into_iter()
    .map(|(month, approved, pending, rejected)| MonthlyTrend {
        month,
        approved,
        pending,
        rejected,
    })
    .collect()
}
