//! Savings Goal - projection engine for time-to-goal under monthly compounding
//!
//! This library provides:
//! - The projection engine: months to reach a goal and a year-by-year series
//! - Input parsing and the precondition checks callers run before projecting
//! - Rate comparisons over many independent projections
//! - Text and CSV rendering of results

pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{InputError, ReportError};
pub use inputs::SavingsInputs;
pub use projection::{project, ProjectionConfig, ProjectionEngine, ProjectionResult, YearSnapshot};
pub use scenario::{RateScenario, ScenarioRunner};
