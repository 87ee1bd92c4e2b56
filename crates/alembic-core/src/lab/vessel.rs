//! Vessel contents and temperature state

use alembic_chemistry::Substances;

/// Default liquid color shown when nothing opaque is in the vessel
const DEFAULT_LIQUID_COLOR: [u8; 4] = [137, 180, 250, 255];

/// Fill percentage contributed by each unit of contents
const FILL_PER_UNIT: usize = 10;

/// Maximum fill percentage before the vessel reads as full
const MAX_FILL: usize = 95;

/// The mutable runtime vessel
///
/// Contents are an ordered multiset: duplicates represent quantity, and
/// insertion order is preserved for the presentation layer (toast
/// coalescing) but carries no reactive meaning beyond iteration order in
/// first-match rules.
#[derive(Clone, Debug)]
pub struct Vessel {
    contents: Vec<String>,
    pub temperature: f32,
    /// Derived, presentation only - must never feed back into matching
    pub boil_intensity: f32,
    /// Derived, presentation only - must never feed back into matching
    pub turbulence: f32,
}

impl Vessel {
    pub fn new(ambient_temperature: f32) -> Self {
        Self {
            contents: Vec::new(),
            temperature: ambient_temperature,
            boil_intensity: 0.0,
            turbulence: 0.0,
        }
    }

    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Units of the given substance currently present
    pub fn count_of(&self, id: &str) -> usize {
        self.contents.iter().filter(|c| c.as_str() == id).count()
    }

    pub fn push(&mut self, id: &str) {
        self.contents.push(id.to_string());
    }

    /// Remove one occurrence of `id`; no-op when absent
    pub fn remove_one(&mut self, id: &str) -> bool {
        match self.contents.iter().position(|c| c == id) {
            Some(idx) => {
                self.contents.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove at most one occurrence of each consumed id, then append the
    /// produced ids. Absent consumed ids are skipped silently.
    pub fn apply_transform(&mut self, consumed: &[String], produced: &[String]) {
        for id in consumed {
            self.remove_one(id);
        }
        for id in produced {
            self.push(id);
        }
    }

    /// Replace the entire contents with the produced ids (dominant synthesis)
    pub fn replace_all(&mut self, produced: &[String]) {
        self.contents.clear();
        for id in produced {
            self.push(id);
        }
    }

    /// Drop all solids and powders, returning how many units were removed
    pub fn retain_fluids(&mut self, substances: &Substances) -> usize {
        let before = self.contents.len();
        self.contents
            .retain(|id| substances.get(id).is_some_and(|def| def.is_fluid()));
        before - self.contents.len()
    }

    /// Empty the vessel and restore ambient conditions
    pub fn clear(&mut self, ambient_temperature: f32) {
        self.contents.clear();
        self.temperature = ambient_temperature;
        self.boil_intensity = 0.0;
        self.turbulence = 0.0;
    }

    /// Channel-wise mean of the opaque substance colors; translucent gases
    /// do not tint the liquid
    pub fn blended_color(&self, substances: &Substances) -> [u8; 4] {
        let mut sum = [0u32; 3];
        let mut count = 0u32;

        for id in &self.contents {
            if let Some(def) = substances.get(id) {
                if def.color[3] == 255 {
                    sum[0] += def.color[0] as u32;
                    sum[1] += def.color[1] as u32;
                    sum[2] += def.color[2] as u32;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return DEFAULT_LIQUID_COLOR;
        }

        [
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
            255,
        ]
    }

    /// Fill height percentage derived from the number of units present
    pub fn fill_level(&self) -> f32 {
        (self.contents.len() * FILL_PER_UNIT).min(MAX_FILL) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alembic_chemistry::SubstanceId;

    #[test]
    fn test_duplicates_are_counted() {
        let mut vessel = Vessel::new(20.0);
        vessel.push(SubstanceId::WATER);
        vessel.push(SubstanceId::WATER);
        vessel.push(SubstanceId::HCL);

        assert_eq!(vessel.count_of(SubstanceId::WATER), 2);
        assert_eq!(vessel.count_of(SubstanceId::HCL), 1);
        assert_eq!(vessel.len(), 3);
    }

    #[test]
    fn test_remove_one_is_defensive() {
        let mut vessel = Vessel::new(20.0);
        vessel.push(SubstanceId::WATER);

        assert!(vessel.remove_one(SubstanceId::WATER));
        assert!(!vessel.remove_one(SubstanceId::WATER));
        assert!(!vessel.remove_one("unobtainium"));
        assert!(vessel.is_empty());
    }

    #[test]
    fn test_apply_transform_removes_one_occurrence_each() {
        let mut vessel = Vessel::new(20.0);
        vessel.push(SubstanceId::HCL);
        vessel.push(SubstanceId::HCL);
        vessel.push(SubstanceId::NAOH);

        vessel.apply_transform(
            &[SubstanceId::HCL.to_string(), SubstanceId::NAOH.to_string()],
            &[SubstanceId::SALT_WATER.to_string()],
        );

        assert_eq!(
            vessel.contents(),
            &[SubstanceId::HCL.to_string(), SubstanceId::SALT_WATER.to_string()]
        );
    }

    #[test]
    fn test_replace_all_discards_bystanders() {
        let mut vessel = Vessel::new(20.0);
        vessel.push(SubstanceId::ETEN);
        vessel.push(SubstanceId::LITMUS);

        vessel.replace_all(&[SubstanceId::POLIETENA.to_string()]);

        assert_eq!(vessel.contents(), &[SubstanceId::POLIETENA.to_string()]);
    }

    #[test]
    fn test_retain_fluids_drops_solids_and_powders() {
        let substances = Substances::new();
        let mut vessel = Vessel::new(20.0);
        vessel.push(SubstanceId::WATER); // liquid
        vessel.push(SubstanceId::IRON); // powder
        vessel.push(SubstanceId::SUGAR); // solid
        vessel.push(SubstanceId::METHANE); // gas

        let removed = vessel.retain_fluids(&substances);

        assert_eq!(removed, 2);
        assert_eq!(
            vessel.contents(),
            &[SubstanceId::WATER.to_string(), SubstanceId::METHANE.to_string()]
        );
    }

    #[test]
    fn test_clear_restores_ambient() {
        let mut vessel = Vessel::new(20.0);
        vessel.push(SubstanceId::WATER);
        vessel.temperature = 150.0;
        vessel.boil_intensity = 60.0;
        vessel.turbulence = 3.0;

        vessel.clear(20.0);

        assert!(vessel.is_empty());
        assert_eq!(vessel.temperature, 20.0);
        assert_eq!(vessel.boil_intensity, 0.0);
        assert_eq!(vessel.turbulence, 0.0);
    }

    #[test]
    fn test_blended_color_skips_translucent() {
        let substances = Substances::new();
        let mut vessel = Vessel::new(20.0);

        // Empty vessel falls back to the default liquid color
        assert_eq!(vessel.blended_color(&substances), DEFAULT_LIQUID_COLOR);

        vessel.push(SubstanceId::FOOD_DYE_RED); // [255, 0, 0]
        vessel.push(SubstanceId::FOOD_DYE_GREEN); // [0, 255, 0]
        vessel.push(SubstanceId::METHANE); // translucent, excluded

        assert_eq!(vessel.blended_color(&substances), [127, 127, 0, 255]);
    }

    #[test]
    fn test_fill_level_saturates() {
        let mut vessel = Vessel::new(20.0);
        assert_eq!(vessel.fill_level(), 0.0);

        vessel.push(SubstanceId::WATER);
        assert_eq!(vessel.fill_level(), 10.0);

        for _ in 0..20 {
            vessel.push(SubstanceId::WATER);
        }
        assert_eq!(vessel.fill_level(), 95.0);
    }
}
