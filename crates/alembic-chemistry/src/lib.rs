//! Substance data and reaction recipes for Alembic
//!
//! This crate provides the foundational data types for the virtual lab:
//! - Substance definitions (SubstanceId, SubstanceDef, Substances)
//! - Physical states and tags (PhysicalState, SubstanceTag)
//! - Explicit reaction recipes (Recipe, RecipeRegistry, VisualEffect)

mod recipes;
mod substances;

pub use recipes::{Recipe, RecipeRegistry, VisualEffect};
pub use substances::{PhysicalState, SubstanceDef, SubstanceId, SubstanceTag, Substances};
