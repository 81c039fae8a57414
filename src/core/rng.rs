//! RNG module - deterministic pseudo-random numbers
//!
//! A small LCG keeps piece selection reproducible from a seed, which
//! the tests rely on. Template and spawn-column draws are independent
//! uniform picks.

/// Linear congruential generator with Numerical Recipes constants
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a value in [0, max). `max` must be nonzero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
