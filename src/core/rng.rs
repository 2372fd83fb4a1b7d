//! Deterministic RNG for piece generation
//!
//! A small seedable xorshift generator keeps piece streams reproducible
//! without an external crate. Statistical quality only has to cover
//! kind/texture/rotation draws.

/// Seedable xorshift32 generator
#[derive(Debug, Clone)]
pub struct EngineRng {
    state: u32,
}

impl EngineRng {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        // xorshift never leaves the all-zero state
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Next random u32 (Marsaglia xorshift32)
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random value in `[0, max)`; `max` must be non-zero
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
