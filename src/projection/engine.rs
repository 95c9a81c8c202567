//! Core projection engine for monthly savings growth

use log::{debug, warn};

use crate::inputs::SavingsInputs;
use super::results::{round_to_unit, ProjectionResult};
use super::state::ProjectionState;

/// Hard ceiling on simulated months (100 years)
pub const MAX_PROJECTION_MONTHS: u32 = 1200;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Months after which the projection stops even if the goal is unmet
    pub max_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_PROJECTION_MONTHS,
        }
    }
}

/// Convert a nominal annual percentage to a monthly decimal rate.
///
/// Nominal APR / 12, not an effective-rate conversion: 12% a year is exactly
/// 1% a month.
pub fn monthly_rate(annual_interest_rate: f64) -> f64 {
    annual_interest_rate / 12.0 / 100.0
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Simulate monthly compounding until the goal is met or the month cap hits.
    ///
    /// Inputs are trusted as-is: out-of-domain values (negative contributions,
    /// negative rates) produce a result, just not a meaningful one. Hitting the
    /// cap is not signalled in the result; use [`ProjectionEngine::project_outcome`]
    /// to tell the two apart.
    pub fn project(&self, inputs: &SavingsInputs) -> ProjectionResult {
        self.project_outcome(inputs).0
    }

    /// Like [`ProjectionEngine::project`], also returning whether the goal was met.
    ///
    /// Reachedness is decided on the unrounded balance, so a capped run that
    /// ends within half a unit of the goal is still reported as not reached.
    pub fn project_outcome(&self, inputs: &SavingsInputs) -> (ProjectionResult, bool) {
        let goal = inputs.goal_amount;

        if goal <= inputs.initial_savings {
            debug!("goal {} already covered by initial savings {}", goal, inputs.initial_savings);
            return (ProjectionResult::already_met(inputs.initial_savings), true);
        }

        let rate = monthly_rate(inputs.annual_interest_rate);
        let mut state = ProjectionState::new(inputs.initial_savings);
        let mut progress_data = Vec::new();

        while state.balance < goal && state.months_elapsed < self.config.max_months {
            state.advance_month(rate, inputs.monthly_contribution);

            if state.is_year_end() || state.balance >= goal {
                progress_data.push(state.take_snapshot());
            }
        }

        // A cap that is not a multiple of 12 can stop mid-year without a snapshot
        if progress_data.is_empty() || (!state.is_year_end() && state.balance < goal) {
            progress_data.push(state.take_snapshot());
        }

        let reached_goal = state.balance >= goal;
        if !reached_goal {
            warn!(
                "projection stopped at the {}-month cap with balance {:.2} below goal {:.2}",
                state.months_elapsed, state.balance, goal
            );
        }

        debug!(
            "projected {} months, final balance {:.2}, interest {:.2}",
            state.months_elapsed, state.balance, state.total_interest
        );

        let result = ProjectionResult {
            years: state.months_elapsed / 12,
            months: state.months_elapsed % 12,
            total_interest: round_to_unit(state.total_interest),
            final_amount: round_to_unit(state.balance),
            progress_data,
        };
        (result, reached_goal)
    }
}

/// Project the time to reach `goal_amount` with the default configuration.
///
/// `annual_interest_rate` is a percentage (5.0 = 5%).
///
/// # Example
///
/// ```
/// use savings_goal::projection::project;
///
/// let result = project(2400.0, 0.0, 200.0, 0.0);
/// assert_eq!((result.years, result.months), (1, 0));
/// assert_eq!(result.final_amount, 2400.0);
/// ```
pub fn project(
    goal_amount: f64,
    initial_savings: f64,
    monthly_contribution: f64,
    annual_interest_rate: f64,
) -> ProjectionResult {
    ProjectionEngine::default().project(&SavingsInputs::new(
        goal_amount,
        initial_savings,
        monthly_contribution,
        annual_interest_rate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_is_nominal_over_twelve() {
        assert_relative_eq!(monthly_rate(12.0), 0.01);
        assert_relative_eq!(monthly_rate(5.0), 0.05 / 12.0);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_already_met() {
        let result = project(1000.0, 1000.0, 200.0, 5.0);
        assert_eq!(result.years, 0);
        assert_eq!(result.months, 0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.final_amount, 1000.0);
        assert_eq!(result.progress_data.len(), 1);
        assert_eq!(result.progress_data[0].year, 0);
        assert_eq!(result.progress_data[0].end_balance, 1000.0);
        assert_eq!(result.progress_data[0].interest_earned, 0.0);
        assert_eq!(result.progress_data[0].total_contributions, 1000.0);
    }

    #[test]
    fn test_already_met_ignores_growth_inputs() {
        let result = project(500.0, 800.0, 0.0, 0.0);
        assert!(result.is_already_met());
        assert_eq!(result.final_amount, 800.0);
    }

    #[test]
    fn test_zero_rate_pure_contribution() {
        let result = project(2400.0, 0.0, 200.0, 0.0);
        assert_eq!((result.years, result.months), (1, 0));
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.final_amount, 2400.0);

        // Goal and year boundary coincide: exactly one snapshot
        assert_eq!(result.progress_data.len(), 1);
        assert_eq!(result.progress_data[0].year, 1);
        assert_eq!(result.progress_data[0].total_contributions, 2400.0);
    }

    #[test]
    fn test_goal_reached_mid_year_emits_partial_snapshot() {
        let result = project(3000.0, 0.0, 200.0, 0.0);
        assert_eq!((result.years, result.months), (1, 3));
        assert_eq!(result.progress_data.len(), 2);

        let last = &result.progress_data[1];
        assert_eq!(last.year, 2);
        assert_eq!(last.end_balance, 3000.0);
        assert_eq!(last.total_contributions, 3000.0);
    }

    #[test]
    fn test_cap_without_growth() {
        let result = project(1_000_000_000.0, 0.0, 0.0, 0.0);
        assert_eq!(result.total_months(), MAX_PROJECTION_MONTHS);
        assert_eq!((result.years, result.months), (100, 0));
        assert_eq!(result.final_amount, 0.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.progress_data.len(), 100);
        assert_eq!(result.progress_data.last().unwrap().year, 100);
    }

    #[test]
    fn test_outcome_uses_unrounded_balance_at_cap() {
        let inputs = SavingsInputs::new(100.4, 99.6, 0.0001, 0.0);
        assert!(inputs.validate().is_ok());

        let (result, reached) = ProjectionEngine::default().project_outcome(&inputs);
        assert_eq!(result.total_months(), MAX_PROJECTION_MONTHS);
        // 99.6 + 0.12 rounds to the rounded goal but never reaches it
        assert_eq!(result.final_amount, 100.0);
        assert!(!reached);
    }

    #[test]
    fn test_outcome_reached_and_already_met() {
        let engine = ProjectionEngine::default();

        let (result, reached) = engine.project_outcome(&SavingsInputs::new(2400.0, 0.0, 200.0, 0.0));
        assert!(reached);
        assert_eq!(result, project(2400.0, 0.0, 200.0, 0.0));

        let (result, reached) = engine.project_outcome(&SavingsInputs::new(500.0, 800.0, 0.0, 0.0));
        assert!(reached);
        assert!(result.is_already_met());

        let (_, reached) = engine.project_outcome(&SavingsInputs::new(1e9, 0.0, 0.0, 0.0));
        assert!(!reached);
    }

    #[test]
    fn test_negative_contribution_runs_to_cap() {
        let result = project(10_000.0, 5_000.0, -1.0, 0.0);
        assert_eq!(result.total_months(), 1200);
        assert_eq!(result.final_amount, 3_800.0);
    }

    #[test]
    fn test_custom_cap_mid_year_still_snapshots() {
        let engine = ProjectionEngine::new(ProjectionConfig { max_months: 18 });
        let result = engine.project(&SavingsInputs::new(1e9, 0.0, 10.0, 0.0));

        assert_eq!((result.years, result.months), (1, 6));
        let years: Vec<u32> = result.progress_data.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1, 2]);
        assert_eq!(result.progress_data[1].total_contributions, 180.0);
    }

    #[test]
    fn test_form_defaults() {
        // 1000 initial, 200/month at 5% toward 10000
        let result = project(10_000.0, 1_000.0, 200.0, 5.0);
        assert_eq!((result.years, result.months), (3, 5));
        assert_eq!(result.progress_data.len(), 4);
        assert!(result.final_amount >= 10_000.0);

        let last = result.progress_data.last().unwrap();
        assert_eq!(last.year, 4);
        assert_eq!(last.total_contributions, 1_000.0 + 200.0 * 41.0);
        assert_eq!(last.end_balance, result.final_amount);

        let interest_sum: f64 = result.progress_data.iter().map(|s| s.interest_earned).sum();
        assert!((interest_sum - result.total_interest).abs() <= result.progress_data.len() as f64);

        let contributed = last.total_contributions - 1_000.0;
        assert!((1_000.0 + contributed + result.total_interest - result.final_amount).abs() <= 1.0);
    }

    #[test]
    fn test_interest_only_growth() {
        // 1000 at 12% nominal doubles after 70 months of 1% compounding
        let result = project(2000.0, 1000.0, 0.0, 12.0);
        assert_eq!(result.total_months(), 70);
        assert_eq!(result.total_interest, result.final_amount - 1000.0);
        assert_eq!(result.progress_data.first().unwrap().interest_earned, 127.0);
    }

    #[test]
    fn test_deterministic() {
        let a = project(25_000.0, 1_234.56, 321.0, 4.2);
        let b = project(25_000.0, 1_234.56, 321.0, 4.2);
        assert_eq!(a, b);
    }
}
