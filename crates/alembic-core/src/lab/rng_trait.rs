//! RNG trait abstraction for lab evaluation
//!
//! Evaporation is the engine's only probabilistic rule; hiding the random
//! source behind a trait keeps reaction tests reproducible with a seeded
//! generator.

/// Random number generator trait for lab evaluation
pub trait LabRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng.
// Covers both ThreadRng (interactive hosts) and seeded RNGs (tests).
impl<T: ?Sized + rand::Rng> LabRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
