//! Experiment definition and RON file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use alembic_chemistry::SubstanceId;

/// One step of a scripted experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExperimentStep {
    /// Suspend for a number of ticks before the next step proceeds
    Wait { ticks: u32 },
    /// Drop a substance into the vessel
    AddSubstance { id: String },
    /// Set the heat control directly
    SetHeat { control: f32 },
    /// Raise the heat control by `step` per tick until it reaches `target`
    RampHeat { target: f32, step: f32 },
}

/// A named sequence of delayed lab steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentDefinition {
    pub id: String,
    pub name: String,
    pub steps: Vec<ExperimentStep>,
}

impl ExperimentDefinition {
    /// Parse an experiment from RON text
    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).context("Failed to parse RON experiment")
    }

    /// Load an experiment from a RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read experiment file: {}", path.display()))?;

        ron::from_str(&content)
            .with_context(|| format!("Failed to parse RON experiment: {}", path.display()))
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize experiment to RON")
    }

    /// The built-in demonstration runs (one tick = 100 ms)
    pub fn builtin() -> Vec<Self> {
        vec![
            Self {
                id: "pe".to_string(),
                name: "Polyethylene Synthesis".to_string(),
                steps: vec![
                    ExperimentStep::Wait { ticks: 5 },
                    ExperimentStep::AddSubstance {
                        id: SubstanceId::ETEN.to_string(),
                    },
                    ExperimentStep::Wait { ticks: 8 },
                    ExperimentStep::RampHeat {
                        target: 50.0,
                        step: 10.0,
                    },
                    ExperimentStep::Wait { ticks: 25 },
                ],
            },
            Self {
                id: "neopren".to_string(),
                name: "Neoprene Synthesis".to_string(),
                steps: vec![
                    ExperimentStep::Wait { ticks: 5 },
                    ExperimentStep::AddSubstance {
                        id: SubstanceId::CLOROPREN.to_string(),
                    },
                    ExperimentStep::Wait { ticks: 8 },
                ],
            },
            Self {
                id: "methane_fire".to_string(),
                name: "Methane Combustion".to_string(),
                steps: vec![
                    ExperimentStep::Wait { ticks: 5 },
                    ExperimentStep::AddSubstance {
                        id: SubstanceId::METHANE.to_string(),
                    },
                    ExperimentStep::Wait { ticks: 8 },
                    ExperimentStep::RampHeat {
                        target: 50.0,
                        step: 10.0,
                    },
                    ExperimentStep::Wait { ticks: 25 },
                ],
            },
            Self {
                id: "hydrogen_boom".to_string(),
                name: "Hydrogen Detonation".to_string(),
                steps: vec![
                    ExperimentStep::Wait { ticks: 5 },
                    ExperimentStep::AddSubstance {
                        id: SubstanceId::HYDROGEN.to_string(),
                    },
                    ExperimentStep::Wait { ticks: 8 },
                    ExperimentStep::RampHeat {
                        target: 50.0,
                        step: 10.0,
                    },
                    ExperimentStep::Wait { ticks: 25 },
                ],
            },
        ]
    }
}
