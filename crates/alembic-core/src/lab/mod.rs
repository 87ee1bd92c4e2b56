//! Lab session - vessel state, reaction evaluation, heat model

mod error;
mod events;
#[allow(clippy::module_inception)]
mod lab;
mod params;
mod reaction_engine;
pub mod rng_trait;
pub mod stats;
mod vessel;

pub use error::ChemistryError;
pub use events::{LabEvent, Severity, VesselSnapshot};
pub use lab::Lab;
pub use params::{LabParams, TICK_INTERVAL_MS};
pub use reaction_engine::{ReactionEngine, ReactionKind, ReactionOutcome};
pub use rng_trait::LabRng;
pub use stats::{LabStats, NoopStats};
pub use vessel::Vessel;
