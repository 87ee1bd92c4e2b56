//! Tunable simulation parameters

use serde::{Deserialize, Serialize};

/// Simulated time covered by one `Lab::tick`, in milliseconds
pub const TICK_INTERVAL_MS: u64 = 100;

/// Tunable constants of the lab simulation
///
/// Defaults reproduce the reference behavior; hosts may deserialize their
/// own overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LabParams {
    /// Resting temperature of an idle vessel (Celsius)
    pub ambient_temperature: f32,
    /// Degrees of target temperature per heat-control unit
    pub degrees_per_heat_unit: f32,
    /// Fraction of the remaining gap closed per tick while heating
    pub heat_approach_rate: f32,
    /// Degrees lost per tick while cooling toward the target
    pub cooling_step: f32,
    /// Temperature above which boil intensity becomes nonzero
    pub boil_threshold: f32,
    /// Minimum temperature for heat-requiring recipes (inclusive)
    pub heated_recipe_threshold: f32,
    /// Ignition threshold for flammables without an explicit flash point
    pub default_flash_point: f32,
    /// Temperature released by acid-base neutralization
    pub neutralization_heat: f32,
    /// Temperature released by ignition
    pub ignition_heat: f32,
    /// Temperature spike from a reactive metal hitting water
    pub metal_water_heat: f32,
    /// Temperature above which water starts evaporating (exclusive)
    pub evaporation_temperature: f32,
    /// Per-tick probability of losing one unit of water while evaporating
    pub evaporation_chance: f32,
}

impl Default for LabParams {
    fn default() -> Self {
        Self {
            ambient_temperature: 20.0,
            degrees_per_heat_unit: 5.0,
            heat_approach_rate: 0.05,
            cooling_step: 1.0,
            boil_threshold: 90.0,
            heated_recipe_threshold: 100.0,
            default_flash_point: 200.0,
            neutralization_heat: 40.0,
            ignition_heat: 100.0,
            metal_water_heat: 150.0,
            evaporation_temperature: 110.0,
            evaporation_chance: 0.2,
        }
    }
}

impl LabParams {
    /// Steady-state temperature for a given heat control setting
    pub fn target_temperature(&self, heat_control: f32) -> f32 {
        self.ambient_temperature + heat_control * self.degrees_per_heat_unit
    }
}
