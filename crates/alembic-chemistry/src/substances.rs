//! Substance definitions and registry

use serde::{Deserialize, Serialize};

/// Built-in substance IDs
///
/// Identifiers are strings because they cross the presentation boundary
/// verbatim (drag-and-drop payloads, experiment files).
pub struct SubstanceId;

impl SubstanceId {
    // Basic solvents
    pub const WATER: &'static str = "water";
    pub const OIL: &'static str = "oil";
    pub const ETHANOL: &'static str = "ethanol";

    // Acids
    pub const HCL: &'static str = "hcl";
    pub const H2SO4: &'static str = "h2so4";
    pub const VINEGAR: &'static str = "vinegar";

    // Bases
    pub const NAOH: &'static str = "naoh";
    pub const BAKING_SODA: &'static str = "baking_soda";
    pub const AMMONIA: &'static str = "ammonia";

    // Metals
    pub const SODIUM: &'static str = "sodium";
    pub const MAGNESIUM: &'static str = "magnesium";
    pub const IRON: &'static str = "iron";
    pub const SULFUR: &'static str = "sulfur";

    // Organics / polymer precursors
    pub const ETEN: &'static str = "eten";
    pub const CLOROPREN: &'static str = "cloropren";
    pub const IZOBUTENA: &'static str = "izobutena";
    pub const METHANE: &'static str = "methane";

    // Indicators & dyes
    pub const LITMUS: &'static str = "litmus";
    pub const FOOD_DYE_RED: &'static str = "food_dye_red";
    pub const FOOD_DYE_GREEN: &'static str = "food_dye_green";

    // Complex
    pub const BLEACH: &'static str = "bleach";
    pub const SUGAR: &'static str = "sugar";

    // Reaction products
    pub const SALT_WATER: &'static str = "salt_water";
    pub const ASH: &'static str = "ash";
    pub const POLIETENA: &'static str = "polietena";
    pub const NEOPREN: &'static str = "neopren";
    pub const POLIZOBUTENA: &'static str = "polizobutena";
    pub const LAVA: &'static str = "lava";
    pub const CARBON: &'static str = "carbon";
    pub const CHLORINE: &'static str = "chlorine";
    pub const HYDROGEN: &'static str = "hydrogen";
}

/// Physical state of a substance at lab conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalState {
    /// Pours and mixes (water, acids)
    Liquid,
    /// Chunks that sink (sodium, sugar)
    Solid,
    /// Fine grains (iron filings, baking soda)
    Powder,
    /// Dissolves into the headspace (methane, ammonia)
    Gas,
}

/// Tags for substance categorization and procedural rule matching
///
/// A closed enum rather than free strings so rule typos fail at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstanceTag {
    /// Dissolves other substances
    Solvent,
    /// pH-neutral
    Neutral,
    /// Can ignite above its flash point
    Flammable,
    /// Does not mix with water
    Hydrophobic,
    /// Evaporates readily
    Volatile,
    /// Proton donor, neutralizes bases
    Acid,
    /// Attacks skin and metal
    Corrosive,
    /// Strong oxidizing agent
    StrongOxidizer,
    /// Weak acid/base strength
    Weak,
    /// Proton acceptor, neutralizes acids
    Base,
    /// Caustic base
    Caustic,
    /// Sharp-smelling
    Pungent,
    /// Metallic element
    Metal,
    /// Reacts violently with water
    ReactiveWater,
    /// Polymerizable monomer
    Monomer,
    /// Poisonous
    Toxic,
    /// pH indicator
    Indicator,
    /// Coloring agent
    Dye,
    /// Oxidizing agent
    Oxidizer,
    /// Sugar-like organic
    Carbohydrate,
    /// Polymer plastic
    Plastic,
    /// Synthetic rubber
    Rubber,
    /// Viscous/adhesive
    Sticky,
    /// Molten material
    Hot,
    /// Gaseous at room temperature
    Gas,
    /// Detonates rather than burns
    Explosive,
}

/// Definition of a substance's display and reactive properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubstanceDef {
    pub id: String,
    pub name: String,
    /// Chemical formula, display only
    pub formula: String,
    pub state: PhysicalState,

    /// Base color (RGBA); translucent colors are excluded from blending
    pub color: [u8; 4],

    /// pH 0-14, where known
    pub ph: Option<f32>,
    /// Ignition temperature (Celsius); flammables without one use the
    /// engine's default flash point
    pub flash_point: Option<f32>,

    pub tags: Vec<SubstanceTag>,
}

impl Default for SubstanceDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "unknown".to_string(),
            formula: "?".to_string(),
            state: PhysicalState::Liquid,
            color: [255, 0, 255, 255], // Magenta for missing substances
            ph: None,
            flash_point: None,
            tags: Vec::new(),
        }
    }
}

impl SubstanceDef {
    pub fn has_tag(&self, tag: SubstanceTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Liquids and gases survive filtration; solids and powders do not
    pub fn is_fluid(&self) -> bool {
        matches!(self.state, PhysicalState::Liquid | PhysicalState::Gas)
    }
}

/// Registry of all substances
///
/// Populated once at construction, read-only afterwards.
pub struct Substances {
    substances: Vec<SubstanceDef>,
}

impl Substances {
    pub fn new() -> Self {
        let mut substances = Self {
            substances: Vec::new(),
        };
        substances.register_defaults();
        log::debug!("registered {} substances", substances.len());
        substances
    }

    fn register_defaults(&mut self) {
        // ===== BASIC SOLVENTS =====

        self.register(SubstanceDef {
            id: SubstanceId::WATER.to_string(),
            name: "Water".to_string(),
            formula: "H2O".to_string(),
            state: PhysicalState::Liquid,
            color: [162, 217, 255, 255],
            ph: Some(7.0),
            tags: vec![SubstanceTag::Solvent, SubstanceTag::Neutral],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::OIL.to_string(),
            name: "Oil".to_string(),
            formula: "Org".to_string(),
            state: PhysicalState::Liquid,
            color: [255, 234, 167, 255],
            flash_point: Some(300.0),
            tags: vec![SubstanceTag::Flammable, SubstanceTag::Hydrophobic],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::ETHANOL.to_string(),
            name: "Ethanol".to_string(),
            formula: "C2H5OH".to_string(),
            state: PhysicalState::Liquid,
            color: [236, 240, 241, 255],
            flash_point: Some(80.0),
            tags: vec![
                SubstanceTag::Flammable,
                SubstanceTag::Solvent,
                SubstanceTag::Volatile,
            ],
            ..Default::default()
        });

        // ===== ACIDS =====

        self.register(SubstanceDef {
            id: SubstanceId::HCL.to_string(),
            name: "Hydrochloric Acid".to_string(),
            formula: "HCl".to_string(),
            state: PhysicalState::Liquid,
            color: [255, 255, 204, 255],
            ph: Some(1.0),
            tags: vec![SubstanceTag::Acid, SubstanceTag::Corrosive],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::H2SO4.to_string(),
            name: "Sulfuric Acid".to_string(),
            formula: "H2SO4".to_string(),
            state: PhysicalState::Liquid,
            color: [227, 227, 227, 255],
            ph: Some(0.5),
            tags: vec![SubstanceTag::Acid, SubstanceTag::StrongOxidizer],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::VINEGAR.to_string(),
            name: "Vinegar (Acetic Acid)".to_string(),
            formula: "CH3COOH".to_string(),
            state: PhysicalState::Liquid,
            color: [225, 177, 44, 255],
            ph: Some(3.0),
            tags: vec![SubstanceTag::Acid, SubstanceTag::Weak],
            ..Default::default()
        });

        // ===== BASES =====

        self.register(SubstanceDef {
            id: SubstanceId::NAOH.to_string(),
            name: "Sodium Hydroxide".to_string(),
            formula: "NaOH".to_string(),
            state: PhysicalState::Solid,
            color: [255, 255, 255, 255],
            ph: Some(14.0),
            tags: vec![SubstanceTag::Base, SubstanceTag::Caustic],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::BAKING_SODA.to_string(),
            name: "Baking Soda".to_string(),
            formula: "NaHCO3".to_string(),
            state: PhysicalState::Powder,
            color: [255, 255, 255, 255],
            ph: Some(9.0),
            tags: vec![SubstanceTag::Base, SubstanceTag::Weak],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::AMMONIA.to_string(),
            name: "Ammonia".to_string(),
            formula: "NH3".to_string(),
            state: PhysicalState::Gas,
            color: [223, 230, 233, 255],
            ph: Some(11.0),
            tags: vec![SubstanceTag::Base, SubstanceTag::Pungent],
            ..Default::default()
        });

        // ===== METALS =====

        self.register(SubstanceDef {
            id: SubstanceId::SODIUM.to_string(),
            name: "Sodium Metal".to_string(),
            formula: "Na".to_string(),
            state: PhysicalState::Solid,
            color: [178, 190, 195, 255],
            tags: vec![SubstanceTag::Metal, SubstanceTag::ReactiveWater],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::MAGNESIUM.to_string(),
            name: "Magnesium".to_string(),
            formula: "Mg".to_string(),
            state: PhysicalState::Solid,
            color: [99, 110, 114, 255],
            tags: vec![SubstanceTag::Metal, SubstanceTag::Flammable],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::IRON.to_string(),
            name: "Iron Filings".to_string(),
            formula: "Fe".to_string(),
            state: PhysicalState::Powder,
            color: [45, 52, 54, 255],
            tags: vec![SubstanceTag::Metal],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::SULFUR.to_string(),
            name: "Sulfur".to_string(),
            formula: "S".to_string(),
            state: PhysicalState::Powder,
            color: [241, 196, 15, 255],
            tags: vec![SubstanceTag::Flammable],
            ..Default::default()
        });

        // ===== ORGANICS / POLYMER PRECURSORS =====

        self.register(SubstanceDef {
            id: SubstanceId::ETEN.to_string(),
            name: "Ethene".to_string(),
            formula: "C2H4".to_string(),
            state: PhysicalState::Gas,
            color: [223, 230, 233, 255],
            tags: vec![SubstanceTag::Monomer, SubstanceTag::Flammable],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::CLOROPREN.to_string(),
            name: "Chloroprene".to_string(),
            formula: "C4H5Cl".to_string(),
            state: PhysicalState::Liquid,
            color: [250, 177, 160, 255],
            tags: vec![SubstanceTag::Monomer, SubstanceTag::Toxic],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::IZOBUTENA.to_string(),
            name: "Isobutylene".to_string(),
            formula: "C4H8".to_string(),
            state: PhysicalState::Gas,
            color: [223, 230, 233, 255],
            tags: vec![SubstanceTag::Monomer],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::METHANE.to_string(),
            name: "Methane".to_string(),
            formula: "CH4".to_string(),
            state: PhysicalState::Gas,
            color: [255, 255, 255, 0], // Invisible gas
            tags: vec![SubstanceTag::Flammable, SubstanceTag::Gas],
            ..Default::default()
        });

        // ===== INDICATORS & DYES =====

        self.register(SubstanceDef {
            id: SubstanceId::LITMUS.to_string(),
            name: "Litmus Indicator".to_string(),
            formula: "Ind".to_string(),
            state: PhysicalState::Liquid,
            color: [108, 92, 231, 255],
            tags: vec![SubstanceTag::Indicator],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::FOOD_DYE_RED.to_string(),
            name: "Red Food Dye".to_string(),
            formula: "DyeR".to_string(),
            state: PhysicalState::Liquid,
            color: [255, 0, 0, 255],
            tags: vec![SubstanceTag::Dye],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::FOOD_DYE_GREEN.to_string(),
            name: "Green Food Dye".to_string(),
            formula: "DyeG".to_string(),
            state: PhysicalState::Liquid,
            color: [0, 255, 0, 255],
            tags: vec![SubstanceTag::Dye],
            ..Default::default()
        });

        // ===== COMPLEX =====

        self.register(SubstanceDef {
            id: SubstanceId::BLEACH.to_string(),
            name: "Bleach".to_string(),
            formula: "NaClO".to_string(),
            state: PhysicalState::Liquid,
            color: [253, 203, 110, 255],
            ph: Some(12.0),
            tags: vec![SubstanceTag::Base, SubstanceTag::Oxidizer],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::SUGAR.to_string(),
            name: "Sugar".to_string(),
            formula: "C12H22O11".to_string(),
            state: PhysicalState::Solid,
            color: [255, 255, 255, 255],
            tags: vec![SubstanceTag::Carbohydrate, SubstanceTag::Flammable],
            ..Default::default()
        });

        // ===== REACTION PRODUCTS =====

        self.register(SubstanceDef {
            id: SubstanceId::SALT_WATER.to_string(),
            name: "Salt Water".to_string(),
            formula: "NaCl(aq)".to_string(),
            state: PhysicalState::Liquid,
            color: [162, 217, 255, 255],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::ASH.to_string(),
            name: "Ash".to_string(),
            formula: "C".to_string(),
            state: PhysicalState::Solid,
            color: [45, 52, 54, 255],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::POLIETENA.to_string(),
            name: "Polyethylene".to_string(),
            formula: "(C2H4)n".to_string(),
            state: PhysicalState::Solid,
            color: [236, 240, 241, 255],
            tags: vec![SubstanceTag::Plastic],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::NEOPREN.to_string(),
            name: "Neoprene".to_string(),
            formula: "(C4H5Cl)n".to_string(),
            state: PhysicalState::Solid,
            color: [45, 52, 54, 255],
            tags: vec![SubstanceTag::Rubber],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::POLIZOBUTENA.to_string(),
            name: "Polyisobutylene".to_string(),
            formula: "(C4H8)n".to_string(),
            state: PhysicalState::Liquid,
            color: [255, 234, 167, 255],
            tags: vec![SubstanceTag::Sticky],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::LAVA.to_string(),
            name: "Unknown Melt".to_string(),
            formula: "???".to_string(),
            state: PhysicalState::Liquid,
            color: [225, 112, 85, 255],
            tags: vec![SubstanceTag::Hot],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::CARBON.to_string(),
            name: "Burnt Carbon".to_string(),
            formula: "C".to_string(),
            state: PhysicalState::Solid,
            color: [0, 0, 0, 255],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::CHLORINE.to_string(),
            name: "Chlorine Gas".to_string(),
            formula: "Cl2".to_string(),
            state: PhysicalState::Gas,
            color: [85, 239, 196, 255],
            tags: vec![SubstanceTag::Toxic, SubstanceTag::Gas],
            ..Default::default()
        });

        self.register(SubstanceDef {
            id: SubstanceId::HYDROGEN.to_string(),
            name: "Hydrogen".to_string(),
            formula: "H2".to_string(),
            state: PhysicalState::Gas,
            color: [255, 255, 255, 0], // Invisible gas
            tags: vec![SubstanceTag::Explosive, SubstanceTag::Gas],
            ..Default::default()
        });
    }

    fn register(&mut self, substance: SubstanceDef) {
        debug_assert!(
            self.get(&substance.id).is_none(),
            "duplicate substance id: {}",
            substance.id
        );
        self.substances.push(substance);
    }

    /// Look up a substance by ID, `None` for unknown ids
    pub fn get(&self, id: &str) -> Option<&SubstanceDef> {
        self.substances.iter().find(|s| s.id == id)
    }

    /// All registered substances, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SubstanceDef> {
        self.substances.iter()
    }

    pub fn len(&self) -> usize {
        self.substances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }
}

impl Default for Substances {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_substance() {
        let substances = Substances::new();

        let water = substances.get(SubstanceId::WATER).unwrap();
        assert_eq!(water.name, "Water");
        assert_eq!(water.state, PhysicalState::Liquid);
        assert_eq!(water.ph, Some(7.0));
        assert!(water.has_tag(SubstanceTag::Solvent));
    }

    #[test]
    fn test_lookup_unknown_substance() {
        let substances = Substances::new();
        assert!(substances.get("unobtainium").is_none());
    }

    #[test]
    fn test_flash_points() {
        let substances = Substances::new();

        // Ethanol has an explicit low flash point
        let ethanol = substances.get(SubstanceId::ETHANOL).unwrap();
        assert_eq!(ethanol.flash_point, Some(80.0));

        // Methane is flammable but relies on the engine default
        let methane = substances.get(SubstanceId::METHANE).unwrap();
        assert!(methane.has_tag(SubstanceTag::Flammable));
        assert!(methane.flash_point.is_none());
    }

    #[test]
    fn test_fluid_classification() {
        let substances = Substances::new();

        assert!(substances.get(SubstanceId::WATER).unwrap().is_fluid());
        assert!(substances.get(SubstanceId::METHANE).unwrap().is_fluid());
        assert!(!substances.get(SubstanceId::NAOH).unwrap().is_fluid());
        assert!(!substances.get(SubstanceId::IRON).unwrap().is_fluid());
    }

    #[test]
    fn test_reaction_products_registered() {
        let substances = Substances::new();

        // Every id the engine can produce must resolve
        for id in [
            SubstanceId::SALT_WATER,
            SubstanceId::ASH,
            SubstanceId::NAOH,
            SubstanceId::POLIETENA,
            SubstanceId::NEOPREN,
            SubstanceId::POLIZOBUTENA,
        ] {
            assert!(substances.get(id).is_some(), "missing product: {}", id);
        }
    }

    #[test]
    fn test_default_def_is_marked_unknown() {
        let def = SubstanceDef::default();
        assert_eq!(def.name, "unknown");
        assert_eq!(def.color, [255, 0, 255, 255]);
    }
}
