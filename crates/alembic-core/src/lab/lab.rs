//! Lab - the session object owning vessel state and registries

use alembic_chemistry::{RecipeRegistry, SubstanceId, Substances};

use super::error::ChemistryError;
use super::events::{LabEvent, Severity, VesselSnapshot};
use super::params::LabParams;
use super::reaction_engine::{ReactionEngine, ReactionKind};
use super::rng_trait::LabRng;
use super::stats::LabStats;
use super::vessel::Vessel;
use crate::experiment::{ExperimentDefinition, ExperimentRun, ExperimentStep};

/// In-progress heat control ramp driven by a scripted experiment
#[derive(Clone, Copy, Debug)]
struct HeatRamp {
    target: f32,
    step: f32,
}

/// One lab session: substance registry, recipe table, vessel, controls
///
/// Explicitly constructed and passed by reference - multiple independent
/// sessions can coexist, and tests build their own. Evaluation runs
/// synchronously inside `add_substance` and `tick`; there is exactly one
/// logical thread of control.
pub struct Lab {
    substances: Substances,
    recipes: RecipeRegistry,
    params: LabParams,
    vessel: Vessel,
    heat_control: f32,
    stir_control: f32,
    heat_ramp: Option<HeatRamp>,
    experiment: Option<ExperimentRun>,
}

impl Lab {
    pub fn new() -> Result<Self, ChemistryError> {
        Self::with_params(LabParams::default())
    }

    pub fn with_params(params: LabParams) -> Result<Self, ChemistryError> {
        let substances = Substances::new();
        let recipes = RecipeRegistry::new();
        Self::validate(&substances, &recipes)?;

        let vessel = Vessel::new(params.ambient_temperature);
        Ok(Self {
            substances,
            recipes,
            params,
            vessel,
            heat_control: 0.0,
            stir_control: 0.0,
            heat_ramp: None,
            experiment: None,
        })
    }

    /// Every id a recipe or procedural rule can reference must resolve,
    /// so evaluation never hits an unknown id at runtime
    fn validate(substances: &Substances, recipes: &RecipeRegistry) -> Result<(), ChemistryError> {
        for recipe in recipes.iter() {
            for id in recipe.inputs.iter().chain(std::iter::once(&recipe.output)) {
                if substances.get(id).is_none() {
                    return Err(ChemistryError::UnknownSubstance { id: id.clone() });
                }
            }
        }

        // Products of the procedural rules
        for id in [
            SubstanceId::WATER,
            SubstanceId::SALT_WATER,
            SubstanceId::ASH,
            SubstanceId::NAOH,
        ] {
            if substances.get(id).is_none() {
                return Err(ChemistryError::UnknownSubstance { id: id.to_string() });
            }
        }

        Ok(())
    }

    pub fn substances(&self) -> &Substances {
        &self.substances
    }

    pub fn recipes(&self) -> &RecipeRegistry {
        &self.recipes
    }

    pub fn params(&self) -> &LabParams {
        &self.params
    }

    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn heat_control(&self) -> f32 {
        self.heat_control
    }

    pub fn set_heat_control(&mut self, control: f32) {
        self.heat_control = control.max(0.0);
        self.heat_ramp = None;
    }

    pub fn set_stir_control(&mut self, control: f32) {
        self.stir_control = control.max(0.0);
    }

    pub fn experiment_active(&self) -> bool {
        self.experiment.is_some()
    }

    /// Drop a substance into the vessel and re-evaluate immediately.
    ///
    /// Unrecognized ids come from untrusted presentation input and are
    /// ignored rather than treated as errors.
    pub fn add_substance<R: LabRng>(
        &mut self,
        id: &str,
        rng: &mut R,
        stats: &mut dyn LabStats,
    ) -> Result<Vec<LabEvent>, ChemistryError> {
        let Some(def) = self.substances.get(id) else {
            log::debug!("ignoring unknown substance id: {id}");
            return Ok(Vec::new());
        };

        let name = def.name.clone();
        self.vessel.push(id);
        stats.record_substance_added();

        let mut events = vec![LabEvent::Notice {
            message: format!("Added: {name}"),
            severity: Severity::Info,
        }];
        if let Some(event) = self.react(rng, stats)? {
            events.push(event);
        }
        Ok(events)
    }

    /// Advance the session by one tick (100 ms of simulated time).
    ///
    /// Runs due experiment steps, moves the temperature toward the heat
    /// control's target, refreshes the derived intensities, and re-evaluates
    /// reactions. Safe to run on an empty vessel.
    pub fn tick<R: LabRng>(
        &mut self,
        rng: &mut R,
        stats: &mut dyn LabStats,
    ) -> Result<Vec<LabEvent>, ChemistryError> {
        let mut events = self.advance_experiment(rng, stats)?;

        if let Some(ramp) = self.heat_ramp {
            self.heat_control = (self.heat_control + ramp.step).min(ramp.target);
            if self.heat_control >= ramp.target {
                self.heat_ramp = None;
            }
        }

        // Heating is driven (exponential approach); cooling is passive
        // ambient loss (fixed linear step)
        let target = self.params.target_temperature(self.heat_control);
        if self.vessel.temperature < target {
            self.vessel.temperature += (target - self.vessel.temperature) * self.params.heat_approach_rate;
        }
        if self.vessel.temperature > target {
            self.vessel.temperature -= self.params.cooling_step;
        }

        self.vessel.boil_intensity = (self.vessel.temperature - self.params.boil_threshold).max(0.0);
        self.vessel.turbulence = self.stir_control / 10.0 + self.vessel.boil_intensity / 20.0;

        if let Some(event) = self.react(rng, stats)? {
            events.push(event);
        }
        Ok(events)
    }

    /// Empty the vessel, restore ambient conditions, zero the controls, and
    /// abort any in-flight scripted experiment
    pub fn reset(&mut self) -> LabEvent {
        self.reset_internal();
        LabEvent::Notice {
            message: "Vessel cleaned.".to_string(),
            severity: Severity::Info,
        }
    }

    fn reset_internal(&mut self) {
        self.vessel.clear(self.params.ambient_temperature);
        self.heat_control = 0.0;
        self.stir_control = 0.0;
        self.heat_ramp = None;
        // No orphaned delayed steps may run against a cleared vessel
        self.experiment = None;
    }

    /// Remove all solids and powders (the "filtration" bench action)
    pub fn filter_solids(&mut self) -> LabEvent {
        let removed = self.vessel.retain_fluids(&self.substances);
        log::debug!("filtration removed {removed} unit(s)");
        LabEvent::Notice {
            message: "Solids removed.".to_string(),
            severity: Severity::Success,
        }
    }

    /// Reset the vessel and start a scripted experiment; its steps advance
    /// on subsequent ticks
    pub fn run_experiment(&mut self, definition: ExperimentDefinition) -> Vec<LabEvent> {
        let mut events = vec![self.reset()];
        log::info!("starting experiment: {}", definition.name);
        events.push(LabEvent::Notice {
            message: format!("AUTO: {}", definition.name),
            severity: Severity::Info,
        });
        self.experiment = Some(ExperimentRun::new(definition));
        events
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> VesselSnapshot {
        VesselSnapshot {
            contents: self.vessel.contents().to_vec(),
            temperature: self.vessel.temperature,
            color: self.vessel.blended_color(&self.substances),
            fill_level: self.vessel.fill_level(),
            boil_intensity: self.vessel.boil_intensity,
            turbulence: self.vessel.turbulence,
        }
    }

    fn advance_experiment<R: LabRng>(
        &mut self,
        rng: &mut R,
        stats: &mut dyn LabStats,
    ) -> Result<Vec<LabEvent>, ChemistryError> {
        let Some(run) = self.experiment.as_mut() else {
            return Ok(Vec::new());
        };

        let steps = run.poll();
        if run.finished() {
            log::info!("experiment complete: {}", run.definition().name);
            self.experiment = None;
        }

        let mut events = Vec::new();
        for step in steps {
            match step {
                // Consumed inside the runner
                ExperimentStep::Wait { .. } => {}
                ExperimentStep::AddSubstance { id } => {
                    events.extend(self.add_substance(&id, rng, stats)?);
                }
                ExperimentStep::SetHeat { control } => {
                    self.set_heat_control(control);
                }
                ExperimentStep::RampHeat { target, step } => {
                    events.push(LabEvent::Notice {
                        message: "Heating up...".to_string(),
                        severity: Severity::Info,
                    });
                    self.heat_ramp = Some(HeatRamp { target, step });
                }
            }

            // A terminal reaction reset the vessel and cancelled the run;
            // remaining steps must not apply to the cleared vessel
            if events.iter().any(|e| e.resets_vessel()) {
                break;
            }
        }
        Ok(events)
    }

    /// Evaluate the vessel once and apply the outcome, if any
    fn react<R: LabRng>(
        &mut self,
        rng: &mut R,
        stats: &mut dyn LabStats,
    ) -> Result<Option<LabEvent>, ChemistryError> {
        let outcome = ReactionEngine::evaluate(
            self.vessel.contents(),
            self.vessel.temperature,
            &self.substances,
            &self.recipes,
            &self.params,
            rng,
        )?;
        let Some(outcome) = outcome else {
            return Ok(None);
        };

        match outcome.kind {
            ReactionKind::Evaporation => stats.record_evaporation(),
            _ => stats.record_reaction(),
        }

        if outcome.replaces_all {
            self.vessel.replace_all(&outcome.produced);
        } else {
            self.vessel.apply_transform(&outcome.consumed, &outcome.produced);
        }
        self.vessel.temperature += outcome.temperature_delta;

        if let Some(message) = &outcome.message {
            log::info!("{message}");
        }

        let event = LabEvent::Reaction {
            message: outcome.message,
            severity: outcome.severity,
            visuals: outcome.visuals,
            produced: outcome.produced,
            vessel_reset: outcome.resets_vessel,
            overlay: outcome.overlay,
        };

        if outcome.resets_vessel {
            self.reset_internal();
        }

        Ok(Some(event))
    }
}
