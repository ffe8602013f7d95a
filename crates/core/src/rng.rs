//! RNG module - uniform random block selection
//!
//! Each spawned block picks one of the four templates with equal probability.
//! A small seeded LCG keeps games reproducible: the same seed yields the same
//! sequence of blocks, which the tests rely on.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with a tiny period; take the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Uniform template picker
#[derive(Debug, Clone)]
pub struct ShapeRandomizer {
    seed: u32,
    rng: SimpleRng,
}

impl ShapeRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next template
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }

    /// Seed this randomizer was created with (for replaying a game)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ShapeRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
