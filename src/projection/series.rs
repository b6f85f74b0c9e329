//! Projection output: derived pace metrics and the monthly chart series

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::format::AxisScale;

/// Read-only metrics recomputed in full from the inputs on every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Weeks in the horizon: months x 4.333, rounded
    pub weeks: f64,

    /// Booked meetings per person per workday
    pub meetings_per_day: f64,

    /// Booked meetings per week across the team
    pub meetings_per_week: f64,

    pub orders_per_week: f64,
    pub revenue_per_week: f64,
    pub revenue_per_month: f64,

    pub orders_year: f64,

    /// New-business revenue over the horizon
    pub revenue_year: f64,

    /// Follow-on revenue from the reorder rate (goal-driven mode only,
    /// zero in activity mode)
    pub reorder_revenue: f64,

    /// New plus reorder revenue
    pub total_revenue: f64,

    /// Total revenue over the sales goal
    pub pct_of_goal: f64,

    /// Daily outreach consistent with the projection: echoes the inputs in
    /// activity mode, solved from the goal in goal-driven mode
    pub emails_per_day: f64,
    pub calls_per_day: f64,
}

/// One month of the cumulative revenue vs goal series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    /// Short calendar month name ("Jan", "Feb", ...)
    pub label: String,

    /// Running projected revenue, rounded for display
    pub cumulative: f64,

    /// Running linear share of the sales goal, rounded for display
    pub goal: f64,
}

/// Short month name `offset` months after the anchor, wrapping year
/// boundaries
pub fn month_label(anchor: NaiveDate, offset: u32) -> String {
    let total = anchor.month0() + offset;
    let year = anchor.year() + (total / 12) as i32;
    let month = total % 12 + 1;

    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%b").to_string(),
        None => String::new(),
    }
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub metrics: DerivedMetrics,

    /// One row per month in the horizon
    pub series: Vec<MonthRow>,
}

impl ProjectionResult {
    /// Tick scale for the tallest value across both series
    pub fn axis_scale(&self) -> AxisScale {
        let max = self
            .series
            .iter()
            .flat_map(|row| [row.cumulative, row.goal])
            .fold(f64::NEG_INFINITY, f64::max);
        AxisScale::select(max)
    }

    /// Write the monthly series as CSV (label, cumulative, goal)
    pub fn write_series_csv(&self, path: &Path) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in &self.series {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
