//! RNG module - injectable randomness for fruit placement
//!
//! The game never reads ambient global randomness. Callers pass a
//! [`RandomSource`] into every operation that needs one, so a seeded
//! [`SimpleRng`] (or a scripted source in tests) makes games reproducible.

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw a value in `0..max`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;
}

/// 32-bit linear congruential generator (Numerical Recipes parameters).
///
/// Not suitable for anything but gameplay; its only job is to make a seed
/// replay the same sequence of fruit positions.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

impl SimpleRng {
    /// Seeded generator. A zero seed is bumped to one.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Current internal state, usable as a seed to replay from this point.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with an empty range");
        // The low bits of an LCG cycle with short periods; take the high half.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
