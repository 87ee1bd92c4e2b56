//! Presentation-facing events and snapshots

use alembic_chemistry::VisualEffect;
use serde::{Deserialize, Serialize};

/// Styling hint for notices, mirroring toast severities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// An event the presentation layer renders
///
/// Derives `PartialEq` so hosts can coalesce duplicate notices into a
/// counter instead of stacking them.
#[derive(Clone, Debug, PartialEq)]
pub enum LabEvent {
    /// Toast-style notice with no vessel side effects
    Notice { message: String, severity: Severity },
    /// A reaction fired
    Reaction {
        /// User-facing message; silent reactions (evaporation) carry none
        message: Option<String>,
        severity: Severity,
        /// Particle effects to spawn, possibly several at once
        visuals: Vec<VisualEffect>,
        /// Substances the reaction produced
        produced: Vec<String>,
        /// The vessel was fully reset as a side effect
        vessel_reset: bool,
        /// Present a result overlay (successful controlled synthesis)
        overlay: bool,
    },
}

impl LabEvent {
    pub fn resets_vessel(&self) -> bool {
        matches!(
            self,
            LabEvent::Reaction {
                vessel_reset: true,
                ..
            }
        )
    }
}

/// Read-only view of the vessel for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct VesselSnapshot {
    /// Substance ids currently present, in insertion order
    pub contents: Vec<String>,
    /// Current temperature (Celsius)
    pub temperature: f32,
    /// Blended liquid color (RGBA)
    pub color: [u8; 4],
    /// Fill height percentage, 0-95
    pub fill_level: f32,
    /// Bubbling strength, 0 below the boil threshold
    pub boil_intensity: f32,
    /// Surface agitation from stirring and boiling
    pub turbulence: f32,
}
