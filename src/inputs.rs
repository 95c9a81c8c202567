//! Savings inputs and the precondition checks callers run before projecting

use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};

/// The four scalars a projection is driven by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsInputs {
    /// Target balance
    pub goal_amount: f64,

    /// Starting balance
    pub initial_savings: f64,

    /// Added at the end of every simulated month
    pub monthly_contribution: f64,

    /// Nominal annual rate as a percentage (5.0 = 5%)
    pub annual_interest_rate: f64,
}

impl SavingsInputs {
    pub fn new(
        goal_amount: f64,
        initial_savings: f64,
        monthly_contribution: f64,
        annual_interest_rate: f64,
    ) -> Self {
        Self {
            goal_amount,
            initial_savings,
            monthly_contribution,
            annual_interest_rate,
        }
    }

    /// Parse user-entered text and run [`SavingsInputs::validate`].
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite
    /// number (including `inf` and `NaN`) is rejected.
    pub fn from_text(
        goal_amount: &str,
        initial_savings: &str,
        monthly_contribution: &str,
        annual_interest_rate: &str,
    ) -> InputResult<Self> {
        let inputs = Self {
            goal_amount: parse_field("goal_amount", goal_amount)?,
            initial_savings: parse_field("initial_savings", initial_savings)?,
            monthly_contribution: parse_field("monthly_contribution", monthly_contribution)?,
            annual_interest_rate: parse_field("annual_interest_rate", annual_interest_rate)?,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the contract the projection engine trusts its caller to enforce.
    ///
    /// Checks run in order: finiteness, goal above savings, then some source
    /// of growth (a positive contribution or a positive rate).
    pub fn validate(&self) -> InputResult<()> {
        for (field, value) in [
            ("goal_amount", self.goal_amount),
            ("initial_savings", self.initial_savings),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_interest_rate", self.annual_interest_rate),
        ] {
            if !value.is_finite() {
                return Err(InputError::InvalidNumber {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if self.goal_amount <= self.initial_savings {
            return Err(InputError::GoalNotAboveSavings {
                goal: self.goal_amount,
                initial: self.initial_savings,
            });
        }

        if self.monthly_contribution <= 0.0 && self.annual_interest_rate <= 0.0 {
            return Err(InputError::NoGrowth);
        }

        Ok(())
    }
}

impl Default for SavingsInputs {
    fn default() -> Self {
        Self {
            goal_amount: 10_000.0,
            initial_savings: 1_000.0,
            monthly_contribution: 200.0,
            annual_interest_rate: 5.0,
        }
    }
}

fn parse_field(field: &'static str, raw: &str) -> InputResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            log::debug!("rejected {} = {:?}", field, raw);
            Err(InputError::InvalidNumber {
                field,
                value: raw.to_string(),
            })
        }
    }
}
