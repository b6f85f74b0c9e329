//! The user-editable input record behind the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::FunnelAssumptions;

/// Everything the user can edit, and the sole source of truth for a plan.
///
/// Serialized verbatim to the state file; every field carries a default so a
/// partial record (a fixed-assumption file without rate fields) still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputRecord {
    /// Target total revenue for the planning horizon
    pub sales_goal: f64,

    /// Length of the planning horizon in months
    pub months: u32,

    /// Average order value: revenue per closed order
    pub aov: f64,

    /// Emails sent per person per workday
    pub emails_per_day: f64,

    /// Calls made per person per workday
    pub calls_per_day: f64,

    /// Calendar anchor for month labels on the chart
    pub start: NaiveDate,

    /// Editable-variant funnel rates; ignored when the engine runs with its
    /// locked assumption set
    #[serde(flatten)]
    pub rates: FunnelAssumptions,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            sales_goal: 1_000_000.0,
            months: 12,
            aov: 288.0,
            emails_per_day: 120.0,
            calls_per_day: 90.0,
            // Jan-first anchor so month 0 labels as "Jan"
            start: default_start(),
            rates: FunnelAssumptions::default_locked(),
        }
    }
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid anchor date")
}

impl InputRecord {
    /// Commit-time clamping, mirroring what each field's editor enforces:
    /// non-finite entries coerce to zero, outreach counts round to whole
    /// numbers, AOV stays at least 1, and fractions stay in [0, 1].
    ///
    /// Note this is the only validation anywhere; a zero close rate still
    /// flows through the engine and surfaces as an infinite requirement.
    pub fn sanitized(&self) -> Self {
        Self {
            sales_goal: finite(self.sales_goal).max(0.0),
            months: self.months.max(1),
            aov: finite(self.aov).max(1.0),
            emails_per_day: finite(self.emails_per_day).round().max(0.0),
            calls_per_day: finite(self.calls_per_day).round().max(0.0),
            start: self.start,
            rates: self.rates.clamped(),
        }
    }
}

fn finite(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}
