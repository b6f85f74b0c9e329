//! Scenario runner for batch pace projections
//!
//! Holds one assumption set and evaluates many input variants without
//! rebuilding the engine per call.

use crate::assumptions::FunnelAssumptions;
use crate::inputs::InputRecord;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-built runner for sensitivity sweeps and what-if batches
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for aov in [150.0, 288.0, 400.0] {
///     let mut inputs = InputRecord::default();
///     inputs.aov = aov;
///     let result = runner.run(&inputs, ProjectionConfig::default());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Locked assumption set shared across all runs
    base_assumptions: FunnelAssumptions,
}

impl ScenarioRunner {
    /// Runner with the locked default assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: FunnelAssumptions::default_locked(),
        }
    }

    /// Runner with a custom assumption set
    pub fn with_assumptions(assumptions: FunnelAssumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single projection with the given config
    pub fn run(&self, inputs: &InputRecord, config: ProjectionConfig) -> ProjectionResult {
        let engine = ProjectionEngine::new(self.base_assumptions, config);
        engine.project(inputs)
    }

    /// Run projections for multiple input variants with the same config
    pub fn run_batch(
        &self,
        variants: &[InputRecord],
        config: ProjectionConfig,
    ) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(self.base_assumptions, config);
        variants.iter().map(|inputs| engine.project(inputs)).collect()
    }

    /// Run multiple configurations (modes) against a single record
    pub fn run_configs(
        &self,
        inputs: &InputRecord,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        configs
            .iter()
            .map(|config| {
                let engine = ProjectionEngine::new(self.base_assumptions, config.clone());
                engine.project(inputs)
            })
            .collect()
    }

    /// Get reference to the base assumptions for inspection
    pub fn assumptions(&self) -> &FunnelAssumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to the base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut FunnelAssumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
