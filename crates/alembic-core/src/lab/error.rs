//! Error types for lab evaluation

use thiserror::Error;

/// Errors raised by the reaction engine and lab session
///
/// Malformed presentation input (an unrecognized substance id dropped into
/// the vessel) is not an error and is ignored at the boundary; these
/// variants signal registry invariant violations.
#[derive(Debug, Error)]
pub enum ChemistryError {
    /// A recipe or procedural rule referenced an id missing from the registry
    #[error("unknown substance id: {id}")]
    UnknownSubstance { id: String },
}
