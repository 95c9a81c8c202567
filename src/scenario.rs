//! Scenario runner for comparing savings timelines
//!
//! Holds one projection configuration and runs many independent projections
//! against it, e.g. the same goal under several interest rates.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::inputs::SavingsInputs;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Outcome of one rate in a rate comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateScenario {
    /// Annual rate used, as a percentage
    pub annual_interest_rate: f64,

    /// Whether the goal was met before the month cap
    pub reached_goal: bool,

    pub result: ProjectionResult,
}

/// Runs projections that share a configuration
///
/// # Example
/// ```
/// use savings_goal::{SavingsInputs, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let scenarios = runner.run_rates(&SavingsInputs::default(), &[2.0, 5.0, 8.0]);
///
/// assert_eq!(scenarios.len(), 3);
/// assert!(scenarios[2].result.total_months() <= scenarios[0].result.total_months());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default projection configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a custom projection configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &SavingsInputs) -> ProjectionResult {
        self.engine.project(inputs)
    }

    /// Run a single projection, also returning whether the goal was met
    pub fn run_outcome(&self, inputs: &SavingsInputs) -> (ProjectionResult, bool) {
        self.engine.project_outcome(inputs)
    }

    /// Run the same inputs under each annual rate, in parallel.
    ///
    /// Output order matches `annual_rates`.
    pub fn run_rates(&self, inputs: &SavingsInputs, annual_rates: &[f64]) -> Vec<RateScenario> {
        log::info!("comparing {} rates for goal {:.2}", annual_rates.len(), inputs.goal_amount);

        annual_rates
            .par_iter()
            .map(|&rate| {
                let scenario_inputs = SavingsInputs {
                    annual_interest_rate: rate,
                    ..*inputs
                };
                let (result, reached_goal) = self.engine.project_outcome(&scenario_inputs);
                RateScenario {
                    annual_interest_rate: rate,
                    reached_goal,
                    result,
                }
            })
            .collect()
    }

    /// Run projections for several independent input sets, in parallel
    pub fn run_batch(&self, inputs: &[SavingsInputs]) -> Vec<ProjectionResult> {
        inputs.par_iter().map(|i| self.engine.project(i)).collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}
