//! Conversion funnel rates and outreach cadence

use serde::{Deserialize, Serialize};

/// Conversion rates and cadence that turn daily outreach into revenue.
///
/// The locked set (`default_locked`) mirrors the fixed-assumption dashboard
/// badges; the editable variant carries these on the input record instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunnelAssumptions {
    /// Fraction of booked meetings that close into an order
    pub close_rate: f64,

    /// Fraction of emails that book a meeting
    pub email_to_meeting: f64,

    /// Fraction of calls that book a meeting
    pub call_to_meeting: f64,

    /// Fraction of a year's new revenue assumed to repeat as reorders
    pub reorder_rate: f64,

    /// Share of meetings sourced from email (vs calls) when back-solving
    /// required activity from a goal
    pub email_share: f64,

    /// Headcount doing outreach
    pub team: f64,

    /// Working days per week
    pub workdays: f64,
}

impl FunnelAssumptions {
    /// The locked assumption set shown as fixed badges on the dashboard
    pub fn default_locked() -> Self {
        Self {
            close_rate: 0.60,
            email_to_meeting: 0.10,
            call_to_meeting: 0.20,
            reorder_rate: 0.29,
            email_share: 0.60,
            team: 1.0,
            workdays: 6.0,
        }
    }

    /// Commit-time clamping: fractions stay in [0, 1], cadence fields stay
    /// whole and positive. Non-finite entries coerce to zero first.
    pub fn clamped(&self) -> Self {
        Self {
            close_rate: clamp_fraction(self.close_rate),
            email_to_meeting: clamp_fraction(self.email_to_meeting),
            call_to_meeting: clamp_fraction(self.call_to_meeting),
            reorder_rate: clamp_fraction(self.reorder_rate),
            email_share: clamp_fraction(self.email_share),
            team: finite(self.team).round().max(1.0),
            workdays: finite(self.workdays).round().clamp(1.0, 7.0),
        }
    }
}

impl Default for FunnelAssumptions {
    fn default() -> Self {
        Self::default_locked()
    }
}

fn finite(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn clamp_fraction(n: f64) -> f64 {
    finite(n).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_set_matches_badges() {
        let locked = FunnelAssumptions::default_locked();
        assert_eq!(locked.close_rate, 0.60);
        assert_eq!(locked.email_to_meeting, 0.10);
        assert_eq!(locked.call_to_meeting, 0.20);
        assert_eq!(locked.team, 1.0);
        assert_eq!(locked.workdays, 6.0);
    }

    #[test]
    fn test_clamped_bounds() {
        let raw = FunnelAssumptions {
            close_rate: 1.4,
            email_to_meeting: -0.2,
            call_to_meeting: f64::NAN,
            reorder_rate: 0.29,
            email_share: f64::INFINITY,
            team: 0.0,
            workdays: 9.7,
        };

        let clamped = raw.clamped();
        assert_eq!(clamped.close_rate, 1.0);
        assert_eq!(clamped.email_to_meeting, 0.0);
        assert_eq!(clamped.call_to_meeting, 0.0);
        assert_eq!(clamped.reorder_rate, 0.29);
        assert_eq!(clamped.email_share, 0.0);
        assert_eq!(clamped.team, 1.0);
        assert_eq!(clamped.workdays, 7.0);
    }
}
