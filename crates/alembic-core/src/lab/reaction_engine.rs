//! Reaction resolution engine
//!
//! Given the current vessel contents and temperature, decides which single
//! reaction (if any) fires. Explicit recipes are checked first in table
//! order, then the procedural rules; the first applicable rule wins and
//! evaluation stops, so at most one outcome is returned per call.

use alembic_chemistry::{
    RecipeRegistry, SubstanceDef, SubstanceId, SubstanceTag, Substances, VisualEffect,
};

use super::error::ChemistryError;
use super::events::Severity;
use super::params::LabParams;
use super::rng_trait::LabRng;

/// Which rule produced an outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionKind {
    /// Explicit recipe match (dominant synthesis)
    Recipe,
    /// Reactive metal hit water
    MetalWater,
    /// Acid-base neutralization
    Neutralization,
    /// A flammable substance passed its flash point
    Ignition,
    /// One unit of water boiled off
    Evaporation,
}

/// Result of one engine evaluation
#[derive(Clone, Debug)]
pub struct ReactionOutcome {
    pub kind: ReactionKind,
    /// Ids removed from the vessel (one occurrence each)
    pub consumed: Vec<String>,
    /// Ids appended to the vessel
    pub produced: Vec<String>,
    /// Recipe outcomes replace the *entire* contents with `produced`,
    /// discarding bystanders; procedural outcomes only remove `consumed`
    pub replaces_all: bool,
    pub temperature_delta: f32,
    pub visuals: Vec<VisualEffect>,
    /// User-facing message; evaporation is silent
    pub message: Option<String>,
    pub severity: Severity,
    /// Present a result overlay after applying
    pub overlay: bool,
    /// Fully reset the vessel after applying (destructive explosions)
    pub resets_vessel: bool,
}

/// Handles reaction resolution over the vessel contents
pub struct ReactionEngine;

impl ReactionEngine {
    /// Evaluate the vessel once and return at most one outcome.
    ///
    /// Re-run after every state-changing event; this is not a one-shot
    /// check. Ids in `contents` are expected to be registry-validated at
    /// the boundary, so an unknown id here is an invariant violation.
    pub fn evaluate<R: LabRng>(
        contents: &[String],
        temperature: f32,
        substances: &Substances,
        recipes: &RecipeRegistry,
        params: &LabParams,
        rng: &mut R,
    ) -> Result<Option<ReactionOutcome>, ChemistryError> {
        if contents.is_empty() {
            return Ok(None);
        }

        let present: Vec<&SubstanceDef> = contents
            .iter()
            .map(|id| {
                substances
                    .get(id)
                    .ok_or_else(|| ChemistryError::UnknownSubstance { id: id.clone() })
            })
            .collect::<Result<_, _>>()?;

        let count_of = |id: &str| contents.iter().filter(|c| c.as_str() == id).count();

        // 1. Explicit recipes, declaration order; first match wins
        for recipe in recipes.iter() {
            if !recipe.inputs_met(&count_of) {
                continue;
            }
            if recipe.requires_heat && temperature < params.heated_recipe_threshold {
                continue;
            }

            let explosion = recipe.visual == VisualEffect::Explosion;
            return Ok(Some(ReactionOutcome {
                kind: ReactionKind::Recipe,
                consumed: recipe.inputs.clone(),
                produced: vec![recipe.output.clone()],
                replaces_all: true,
                temperature_delta: 0.0,
                visuals: vec![recipe.visual],
                message: Some(recipe.message.clone()),
                severity: Severity::Success,
                overlay: !explosion,
                resets_vessel: explosion,
            }));
        }

        // 2. Reactive metal + water
        if count_of(SubstanceId::WATER) > 0 {
            if let Some(metal) = present
                .iter()
                .find(|s| s.has_tag(SubstanceTag::ReactiveWater))
            {
                return Ok(Some(ReactionOutcome {
                    kind: ReactionKind::MetalWater,
                    consumed: vec![metal.id.clone(), SubstanceId::WATER.to_string()],
                    produced: vec![SubstanceId::NAOH.to_string()],
                    replaces_all: false,
                    temperature_delta: params.metal_water_heat,
                    visuals: vec![VisualEffect::Explosion],
                    message: Some(format!("{} exploded on contact with water!", metal.name)),
                    severity: Severity::Success,
                    overlay: false,
                    resets_vessel: true,
                }));
            }
        }

        // 3. Acid-base neutralization: the first acid and first base in
        // contents iteration order; bystanders are untouched
        let acid = present.iter().find(|s| s.has_tag(SubstanceTag::Acid));
        let base = present.iter().find(|s| s.has_tag(SubstanceTag::Base));
        if let (Some(acid), Some(base)) = (acid, base) {
            return Ok(Some(ReactionOutcome {
                kind: ReactionKind::Neutralization,
                consumed: vec![acid.id.clone(), base.id.clone()],
                produced: vec![SubstanceId::SALT_WATER.to_string()],
                replaces_all: false,
                temperature_delta: params.neutralization_heat,
                visuals: vec![VisualEffect::Steam],
                message: Some(format!("Neutralization: {} + {}", acid.name, base.name)),
                severity: Severity::Success,
                overlay: false,
                resets_vessel: false,
            }));
        }

        // 4. Ignition of the first flammable strictly above its flash point
        if let Some(fuel) = present.iter().find(|s| s.has_tag(SubstanceTag::Flammable)) {
            let flash_point = fuel.flash_point.unwrap_or(params.default_flash_point);
            if temperature > flash_point {
                return Ok(Some(ReactionOutcome {
                    kind: ReactionKind::Ignition,
                    consumed: vec![fuel.id.clone()],
                    produced: vec![SubstanceId::ASH.to_string()],
                    replaces_all: false,
                    temperature_delta: params.ignition_heat,
                    visuals: vec![VisualEffect::Fire, VisualEffect::Smoke],
                    message: Some(format!("{} caught fire!", fuel.name)),
                    severity: Severity::Warning,
                    overlay: false,
                    resets_vessel: false,
                }));
            }
        }

        // 5. Evaporation: probabilistic, non-terminal, can recur on later ticks
        if temperature > params.evaporation_temperature
            && count_of(SubstanceId::WATER) > 0
            && rng.check_probability(params.evaporation_chance)
        {
            return Ok(Some(ReactionOutcome {
                kind: ReactionKind::Evaporation,
                consumed: vec![SubstanceId::WATER.to_string()],
                produced: Vec::new(),
                replaces_all: false,
                temperature_delta: 0.0,
                visuals: vec![VisualEffect::Steam],
                message: None,
                severity: Severity::Info,
                overlay: false,
                resets_vessel: false,
            }));
        }

        Ok(None)
    }
}
