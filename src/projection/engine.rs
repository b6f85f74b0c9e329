//! Core pace engine: pure transform from plan inputs to derived metrics
//! and the monthly cumulative series

use crate::assumptions::FunnelAssumptions;
use crate::inputs::InputRecord;

use super::series::{month_label, DerivedMetrics, MonthRow, ProjectionResult};

/// Weeks per month, 52 / 12 as used throughout the dashboard
pub const WEEKS_PER_MONTH: f64 = 4.333;

/// Direction of the pace computation.
///
/// The two modes deliberately stay separate rather than reconciled: the
/// goal-driven mode back-solves through the email share, the activity mode
/// never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanMode {
    /// Given daily outreach, derive the revenue it produces
    #[default]
    ActivityToRevenue,

    /// Given the revenue goal, back-solve the daily outreach it requires
    RevenueToActivity,
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    pub mode: PlanMode,

    /// Use the engine's locked assumption set instead of the rates carried
    /// on the input record
    pub fixed: bool,

    /// Whether to build the monthly chart series
    pub build_series: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: PlanMode::ActivityToRevenue,
            fixed: true,
            build_series: true,
        }
    }
}

/// Pure projection engine. No validation, no side effects: out-of-range
/// inputs (a zero close rate, a zero AOV) divide through to infinity and
/// the formatting layer renders the result as-is.
pub struct ProjectionEngine {
    assumptions: FunnelAssumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(assumptions: FunnelAssumptions, config: ProjectionConfig) -> Self {
        Self {
            assumptions,
            config,
        }
    }

    /// Run the projection for one input record
    pub fn project(&self, inputs: &InputRecord) -> ProjectionResult {
        let rates = if self.config.fixed {
            self.assumptions
        } else {
            inputs.rates
        };

        let metrics = match self.config.mode {
            PlanMode::ActivityToRevenue => activity_to_revenue(inputs, &rates),
            PlanMode::RevenueToActivity => revenue_to_activity(inputs, &rates),
        };

        let series = if self.config.build_series {
            build_series(inputs, metrics.revenue_per_month)
        } else {
            Vec::new()
        };

        ProjectionResult { metrics, series }
    }
}

/// Forward direction: outreach volume in, resulting revenue out
fn activity_to_revenue(inputs: &InputRecord, rates: &FunnelAssumptions) -> DerivedMetrics {
    let weeks = (inputs.months as f64 * WEEKS_PER_MONTH).round();

    let meetings_per_day = inputs.emails_per_day * rates.email_to_meeting
        + inputs.calls_per_day * rates.call_to_meeting;
    let meetings_per_week = meetings_per_day * rates.workdays * rates.team;
    let orders_per_week = meetings_per_week * rates.close_rate;
    let revenue_per_week = orders_per_week * inputs.aov;
    let revenue_per_month = revenue_per_week * WEEKS_PER_MONTH;
    let revenue_year = revenue_per_month * inputs.months as f64;
    let orders_year = orders_per_week * weeks;

    DerivedMetrics {
        weeks,
        meetings_per_day,
        meetings_per_week,
        orders_per_week,
        revenue_per_week,
        revenue_per_month,
        orders_year,
        revenue_year,
        reorder_revenue: 0.0,
        total_revenue: revenue_year,
        pct_of_goal: revenue_year / inputs.sales_goal,
        emails_per_day: inputs.emails_per_day,
        calls_per_day: inputs.calls_per_day,
    }
}

/// Inverse direction: sales goal in, required daily outreach out.
/// The goal is discounted by the reorder rate before back-solving, and the
/// solved meeting volume is split across channels by the email share.
fn revenue_to_activity(inputs: &InputRecord, rates: &FunnelAssumptions) -> DerivedMetrics {
    let weeks = (inputs.months as f64 * WEEKS_PER_MONTH).round();

    let orders_needed = inputs.sales_goal / (inputs.aov * (1.0 + rates.reorder_rate));
    let meetings_needed = orders_needed / rates.close_rate;
    let meetings_per_day = meetings_needed / (weeks * rates.workdays * rates.team);

    let emails_per_day = meetings_per_day * rates.email_share / rates.email_to_meeting;
    let calls_per_day = meetings_per_day * (1.0 - rates.email_share) / rates.call_to_meeting;

    // Forward chain from the solved meeting volume
    let meetings_per_week = meetings_per_day * rates.workdays * rates.team;
    let orders_per_week = meetings_per_week * rates.close_rate;
    let revenue_per_week = orders_per_week * inputs.aov;
    let revenue_per_month = revenue_per_week * WEEKS_PER_MONTH;
    let revenue_year = revenue_per_month * inputs.months as f64;
    let orders_year = orders_per_week * weeks;

    let reorder_revenue = revenue_year * rates.reorder_rate;
    let total_revenue = revenue_year + reorder_revenue;

    DerivedMetrics {
        weeks,
        meetings_per_day,
        meetings_per_week,
        orders_per_week,
        revenue_per_week,
        revenue_per_month,
        orders_year,
        revenue_year,
        reorder_revenue,
        total_revenue,
        pct_of_goal: total_revenue / inputs.sales_goal,
        emails_per_day,
        calls_per_day,
    }
}

/// Monthly rows: running projected revenue against the linear goal line,
/// both rounded for display
fn build_series(inputs: &InputRecord, revenue_per_month: f64) -> Vec<MonthRow> {
    let monthly_goal = inputs.sales_goal / inputs.months as f64;
    let mut cumulative = 0.0;

    (0..inputs.months)
        .map(|i| {
            cumulative += revenue_per_month;
            MonthRow {
                label: month_label(inputs.start, i),
                cumulative: cumulative.round(),
                goal: (monthly_goal * (i + 1) as f64).round(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::AxisScale;
    use approx::assert_relative_eq;

    fn engine(config: ProjectionConfig) -> ProjectionEngine {
        ProjectionEngine::new(FunnelAssumptions::default_locked(), config)
    }

    #[test]
    fn test_reference_plan_activity_mode() {
        // 120 emails x 10% + 90 calls x 20% = 30 meetings/day
        let result = engine(ProjectionConfig::default()).project(&InputRecord::default());
        let m = &result.metrics;

        assert_relative_eq!(m.meetings_per_day, 30.0);
        assert_relative_eq!(m.meetings_per_week, 180.0);
        assert_relative_eq!(m.orders_per_week, 108.0);
        assert_relative_eq!(m.revenue_per_week, 31_104.0);
        assert_relative_eq!(m.revenue_per_month, 134_773.632, epsilon = 1e-6);
        assert_relative_eq!(m.revenue_year, 1_617_283.584, epsilon = 1e-6);
        assert_relative_eq!(m.orders_year, 108.0 * 52.0);
        assert_relative_eq!(m.weeks, 52.0);
        assert_relative_eq!(m.pct_of_goal, 1.617283584, epsilon = 1e-9);
    }

    #[test]
    fn test_revenue_per_week_composes_from_sub_formulas() {
        let inputs = InputRecord {
            emails_per_day: 75.0,
            calls_per_day: 33.0,
            aov: 410.0,
            ..InputRecord::default()
        };
        let rates = FunnelAssumptions::default_locked();

        let result = engine(ProjectionConfig::default()).project(&inputs);
        let meetings_per_day =
            inputs.emails_per_day * rates.email_to_meeting + inputs.calls_per_day * rates.call_to_meeting;

        // No hidden rounding anywhere before display
        assert_relative_eq!(
            result.metrics.revenue_per_week,
            meetings_per_day * rates.workdays * rates.team * rates.close_rate * inputs.aov
        );
    }

    #[test]
    fn test_series_cumulative_and_goal_shape() {
        let result = engine(ProjectionConfig::default()).project(&InputRecord::default());
        let series = &result.series;
        assert_eq!(series.len(), 12);

        let revenue_per_month = result.metrics.revenue_per_month;
        let monthly_goal = 1_000_000.0 / 12.0;

        for (i, row) in series.iter().enumerate() {
            assert_eq!(row.cumulative, (revenue_per_month * (i + 1) as f64).round());
            assert_eq!(row.goal, (monthly_goal * (i + 1) as f64).round());
            if i > 0 {
                assert!(row.cumulative >= series[i - 1].cumulative);
            }
        }

        // Goal line lands on the sales goal at the horizon, within rounding
        assert!((series[11].goal - 1_000_000.0).abs() <= 1.0);
        assert_eq!(series[0].label, "Jan");
        assert_eq!(series[11].label, "Dec");
    }

    #[test]
    fn test_one_month_horizon() {
        let inputs = InputRecord {
            months: 1,
            ..InputRecord::default()
        };

        let result = engine(ProjectionConfig::default()).project(&inputs);
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.series[0].goal, 1_000_000.0);
    }

    #[test]
    fn test_zero_outreach_zeroes_revenue() {
        let inputs = InputRecord {
            emails_per_day: 0.0,
            calls_per_day: 0.0,
            ..InputRecord::default()
        };

        let result = engine(ProjectionConfig::default()).project(&inputs);
        let m = &result.metrics;

        assert_eq!(m.meetings_per_day, 0.0);
        assert_eq!(m.revenue_per_week, 0.0);
        assert_eq!(m.revenue_year, 0.0);
        assert!(result.series.iter().all(|row| row.cumulative == 0.0));
    }

    #[test]
    fn test_goal_driven_mode_recovers_the_goal() {
        let config = ProjectionConfig {
            mode: PlanMode::RevenueToActivity,
            ..Default::default()
        };

        let result = engine(config).project(&InputRecord::default());
        let m = &result.metrics;

        assert!(m.emails_per_day > 0.0);
        assert!(m.calls_per_day > 0.0);
        assert!(m.reorder_revenue > 0.0);

        // Running at the solved pace hits the goal, up to weeks rounding
        assert_relative_eq!(m.total_revenue, 1_000_000.0, max_relative = 1e-3);
        assert_relative_eq!(m.pct_of_goal, 1.0, max_relative = 1e-3);
    }

    #[test]
    fn test_editable_rates_override_locked_set() {
        let mut inputs = InputRecord::default();
        inputs.rates.close_rate = 0.30;

        let fixed = engine(ProjectionConfig::default()).project(&inputs);
        let editable = engine(ProjectionConfig {
            fixed: false,
            ..Default::default()
        })
        .project(&inputs);

        assert_relative_eq!(fixed.metrics.orders_per_week, 108.0);
        assert_relative_eq!(editable.metrics.orders_per_week, 54.0);
    }

    #[test]
    fn test_zero_close_rate_divides_to_infinity() {
        let mut inputs = InputRecord::default();
        inputs.rates.close_rate = 0.0;

        let config = ProjectionConfig {
            mode: PlanMode::RevenueToActivity,
            fixed: false,
            ..Default::default()
        };

        let result = engine(config).project(&inputs);
        assert!(result.metrics.meetings_per_day.is_infinite());
        assert!(result.metrics.emails_per_day.is_infinite());
    }

    #[test]
    fn test_axis_scale_for_reference_plan() {
        let result = engine(ProjectionConfig::default()).project(&InputRecord::default());
        assert_eq!(result.axis_scale(), AxisScale::Millions);
        let last = result.series.last().unwrap();
        assert_eq!(result.axis_scale().format(last.cumulative), "$1.6M");
    }

    #[test]
    fn test_skipping_series_leaves_metrics_intact() {
        let config = ProjectionConfig {
            build_series: false,
            ..Default::default()
        };

        let result = engine(config).project(&InputRecord::default());
        assert!(result.series.is_empty());
        assert_relative_eq!(result.metrics.revenue_per_week, 31_104.0);
    }
}
