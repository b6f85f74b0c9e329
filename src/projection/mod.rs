//! Pace projection: the pure engine and its monthly series output

mod engine;
mod series;

pub use engine::{PlanMode, ProjectionConfig, ProjectionEngine, WEEKS_PER_MONTH};
pub use series::{month_label, DerivedMetrics, MonthRow, ProjectionResult};
