//! Sales Pace - projection engine for outreach-driven revenue planning
//!
//! This library provides:
//! - A pure projection engine mapping plan inputs to pace metrics and a
//!   cumulative revenue-vs-goal monthly series
//! - Forward (activity-to-revenue) and goal-driven (revenue-to-activity)
//!   planning modes over one shared formula set
//! - JSON file persistence for the input record with silent default fallback
//! - Display formatting for currency, whole percentages, and axis ticks

pub mod assumptions;
pub mod format;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::FunnelAssumptions;
pub use inputs::{InputRecord, InputStore};
pub use projection::{
    DerivedMetrics, MonthRow, PlanMode, ProjectionConfig, ProjectionEngine, ProjectionResult,
};
pub use scenario::ScenarioRunner;
