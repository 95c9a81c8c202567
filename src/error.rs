//! Error types for the caller layer.
//!
//! The projection engine itself is total and never fails. These errors cover
//! the checks a caller performs before invoking it, and the report writers.

use thiserror::Error;

/// Rejection of user-supplied savings inputs.
///
/// # Example
///
/// ```
/// use savings_goal::error::InputError;
///
/// let error = InputError::GoalNotAboveSavings { goal: 500.0, initial: 1000.0 };
/// assert_eq!(error.to_string(), "Goal amount must be greater than initial savings.");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A field did not parse as a finite number.
    ///
    /// The message is deliberately generic; `field` and `value` are kept for logging.
    #[error("Please enter valid numbers in all fields.")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that was supplied.
        value: String,
    },

    /// The goal does not exceed what is already saved.
    #[error("Goal amount must be greater than initial savings.")]
    GoalNotAboveSavings {
        /// Requested goal.
        goal: f64,
        /// Current savings.
        initial: f64,
    },

    /// Neither contributions nor interest can grow the balance.
    #[error("With no monthly contributions or interest, you will never reach your goal.")]
    NoGrowth,
}

/// Failure while writing a projection report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization failed.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return InputError.
pub type InputResult<T> = Result<T, InputError>;
