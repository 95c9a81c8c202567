//! Projection engine: months-to-goal and yearly growth under monthly compounding

mod state;
mod engine;
mod results;

pub use state::ProjectionState;
pub use engine::{monthly_rate, project, ProjectionConfig, ProjectionEngine, MAX_PROJECTION_MONTHS};
pub use results::{round_to_unit, ProjectionResult, ProjectionSummary, YearSnapshot};
