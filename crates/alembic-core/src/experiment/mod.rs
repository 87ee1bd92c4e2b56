//! Scripted experiments - automated multi-step demonstrations

mod definition;
mod runner;

pub use definition::{ExperimentDefinition, ExperimentStep};
pub use runner::ExperimentRun;
