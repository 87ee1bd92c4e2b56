//! Explicit reaction recipes
//!
//! Recipes are evaluated in declaration order and the first match wins, so
//! overriding recipes must be registered before more general ones.

use serde::{Deserialize, Serialize};

use crate::substances::SubstanceId;

/// Visual effect a reaction drives on the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualEffect {
    Smoke,
    Bubbles,
    Fire,
    Explosion,
    Steam,
}

/// An explicit reaction rule
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recipe {
    /// Required input ids; multiset membership, ordering irrelevant
    pub inputs: Vec<String>,
    /// Requires the vessel to be at or above the heated-reaction threshold
    pub requires_heat: bool,
    /// The single substance the vessel contents collapse into
    pub output: String,
    /// User-facing success message
    pub message: String,
    pub visual: VisualEffect,
}

impl Recipe {
    /// True when every required input is present in the given counts
    pub fn inputs_met(&self, count_of: impl Fn(&str) -> usize) -> bool {
        self.inputs.iter().all(|id| count_of(id) > 0)
    }
}

/// Ordered registry of explicit recipes
pub struct RecipeRegistry {
    recipes: Vec<Recipe>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            recipes: Vec::new(),
        };
        registry.register_defaults();
        log::debug!("registered {} recipes", registry.len());
        registry
    }

    /// Create an empty registry (tests build their own tables)
    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    fn register_defaults(&mut self) {
        self.register(Recipe {
            inputs: vec![SubstanceId::ETEN.to_string()],
            requires_heat: true,
            output: SubstanceId::POLIETENA.to_string(),
            message: "Polymerization complete: polyethylene produced!".to_string(),
            visual: VisualEffect::Smoke,
        });

        self.register(Recipe {
            inputs: vec![SubstanceId::CLOROPREN.to_string()],
            requires_heat: false,
            output: SubstanceId::NEOPREN.to_string(),
            message: "Polymerization complete: neoprene produced!".to_string(),
            visual: VisualEffect::Bubbles,
        });

        self.register(Recipe {
            inputs: vec![SubstanceId::IZOBUTENA.to_string()],
            requires_heat: false,
            output: SubstanceId::POLIZOBUTENA.to_string(),
            message: "Viscous polyisobutylene formed.".to_string(),
            visual: VisualEffect::Bubbles,
        });

        self.register(Recipe {
            inputs: vec![SubstanceId::HYDROGEN.to_string()],
            requires_heat: true,
            output: SubstanceId::WATER.to_string(),
            message: "BOOM! The hydrogen detonated.".to_string(),
            visual: VisualEffect::Explosion,
        });
    }

    pub fn register(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Recipes in declaration order, traversed top-to-bottom
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_preserved() {
        let registry = RecipeRegistry::new();
        let outputs: Vec<&str> = registry.iter().map(|r| r.output.as_str()).collect();
        assert_eq!(
            outputs,
            vec![
                SubstanceId::POLIETENA,
                SubstanceId::NEOPREN,
                SubstanceId::POLIZOBUTENA,
                SubstanceId::WATER,
            ]
        );
    }

    #[test]
    fn test_inputs_met_checks_counts() {
        let recipe = Recipe {
            inputs: vec!["a".to_string(), "b".to_string()],
            requires_heat: false,
            output: "c".to_string(),
            message: String::new(),
            visual: VisualEffect::Bubbles,
        };

        assert!(recipe.inputs_met(|id| if id == "a" || id == "b" { 1 } else { 0 }));
        assert!(!recipe.inputs_met(|id| if id == "a" { 2 } else { 0 }));
    }

    #[test]
    fn test_heated_recipes_marked() {
        let registry = RecipeRegistry::new();
        let polymerization = registry
            .iter()
            .find(|r| r.output == SubstanceId::POLIETENA)
            .unwrap();
        assert!(polymerization.requires_heat);

        let neoprene = registry
            .iter()
            .find(|r| r.output == SubstanceId::NEOPREN)
            .unwrap();
        assert!(!neoprene.requires_heat);
    }
}
