//! Running state of a savings projection

use super::results::{round_to_unit, YearSnapshot};

/// Unrounded balances carried from month to month
///
/// Nothing here is rounded; rounding happens only when a snapshot or the
/// final result is emitted, so error does not compound across months.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Whole months simulated so far
    pub months_elapsed: u32,

    /// Current balance
    pub balance: f64,

    /// Interest accrued since the start of the projection
    pub total_interest: f64,

    /// Interest accrued since the last snapshot
    pub yearly_interest: f64,

    /// Initial balance plus every contribution made so far
    pub total_contributions: f64,
}

impl ProjectionState {
    /// Initialize state at month zero
    pub fn new(initial_savings: f64) -> Self {
        Self {
            months_elapsed: 0,
            balance: initial_savings,
            total_interest: 0.0,
            yearly_interest: 0.0,
            total_contributions: initial_savings,
        }
    }

    /// Simulate one month: credit interest on the opening balance, then add
    /// the contribution. Returns the interest credited.
    pub fn advance_month(&mut self, monthly_rate: f64, monthly_contribution: f64) -> f64 {
        let interest = self.balance * monthly_rate;

        self.balance += interest;
        self.total_interest += interest;
        self.yearly_interest += interest;

        self.balance += monthly_contribution;
        self.total_contributions += monthly_contribution;

        self.months_elapsed += 1;
        interest
    }

    /// True on a 12-month boundary
    pub fn is_year_end(&self) -> bool {
        self.months_elapsed % 12 == 0
    }

    /// Emit a rounded snapshot and start a fresh yearly interest window
    pub fn take_snapshot(&mut self) -> YearSnapshot {
        let snapshot = YearSnapshot {
            year: self.months_elapsed.div_ceil(12),
            end_balance: round_to_unit(self.balance),
            interest_earned: round_to_unit(self.yearly_interest),
            total_contributions: round_to_unit(self.total_contributions),
        };
        self.yearly_interest = 0.0;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interest_accrues_before_contribution() {
        let mut state = ProjectionState::new(1000.0);
        let interest = state.advance_month(0.01, 100.0);

        assert_relative_eq!(interest, 10.0);
        assert_relative_eq!(state.balance, 1110.0);
        assert_relative_eq!(state.total_contributions, 1100.0);
        assert_eq!(state.months_elapsed, 1);
    }

    #[test]
    fn test_snapshot_resets_yearly_interest_only() {
        let mut state = ProjectionState::new(1000.0);
        for _ in 0..12 {
            state.advance_month(0.005, 0.0);
        }
        assert!(state.is_year_end());

        let snapshot = state.take_snapshot();
        assert_eq!(snapshot.year, 1);
        assert_eq!(snapshot.end_balance, 1062.0);
        assert_eq!(snapshot.interest_earned, 62.0);
        assert_eq!(state.yearly_interest, 0.0);
        assert_relative_eq!(state.total_interest, 61.677_811_864_5, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_year_snapshot_rounds_year_up() {
        let mut state = ProjectionState::new(0.0);
        for _ in 0..14 {
            state.advance_month(0.0, 50.0);
        }
        assert!(!state.is_year_end());
        assert_eq!(state.take_snapshot().year, 2);
    }
}
