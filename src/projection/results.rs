//! Output structures for savings projections

use serde::{Deserialize, Serialize};

/// Round a monetary amount to the nearest whole unit (halves away from zero)
pub fn round_to_unit(amount: f64) -> f64 {
    amount.round()
}

/// Balance and flows for one simulated year
///
/// The last snapshot of a projection may cover a partial year when the goal
/// is reached mid-year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    /// 1-indexed year, or 0 when the goal was already met
    pub year: u32,
    pub end_balance: f64,
    /// Interest earned within this year only
    pub interest_earned: f64,
    /// Cumulative, including the initial balance
    pub total_contributions: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Whole years elapsed
    pub years: u32,

    /// Remaining months, always in 0..=11
    pub months: u32,

    /// Interest accrued over the whole projection, rounded
    pub total_interest: f64,

    /// Balance when the goal was reached (or at truncation), rounded
    pub final_amount: f64,

    /// One snapshot per simulated year, in increasing year order
    pub progress_data: Vec<YearSnapshot>,
}

impl ProjectionResult {
    /// Result for a goal that the initial balance already covers.
    ///
    /// The initial balance is reported as supplied, without rounding.
    pub fn already_met(initial_savings: f64) -> Self {
        let amount = initial_savings;
        Self {
            years: 0,
            months: 0,
            total_interest: 0.0,
            final_amount: amount,
            progress_data: vec![YearSnapshot {
                year: 0,
                end_balance: amount,
                interest_earned: 0.0,
                total_contributions: amount,
            }],
        }
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    pub fn is_already_met(&self) -> bool {
        self.total_months() == 0
    }

    /// Get summary statistics.
    ///
    /// The initial balance cannot be recovered from the yearly series alone,
    /// so the caller supplies it.
    pub fn summary(&self, initial_savings: f64) -> ProjectionSummary {
        let total_contributions = self
            .progress_data
            .last()
            .map(|s| s.total_contributions)
            .unwrap_or(self.final_amount);

        // The already-met snapshot carries the initial balance unrounded
        let total_contributed = if self.is_already_met() {
            0.0
        } else {
            (total_contributions - round_to_unit(initial_savings)).max(0.0)
        };

        ProjectionSummary {
            years: self.years,
            months: self.months,
            total_months: self.total_months(),
            total_contributed,
            total_interest: self.total_interest,
            final_amount: self.final_amount,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub months: u32,
    pub total_months: u32,
    /// Sum of monthly contributions, excluding the initial balance
    pub total_contributed: f64,
    pub total_interest: f64,
    pub final_amount: f64,
}
