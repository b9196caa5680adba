//! Random roll helpers
//!
//! Every random decision in the engine is a uniform draw on `[0, 1)` taken
//! from a caller-supplied `Rng`. `ScriptedRng` replays a fixed sequence of
//! rolls so that tests (and callers' tests) can pin each decision.

use rand::{Error, Rng, RngCore};
use std::collections::VecDeque;

/// Draw a uniform roll in `[0, 1)`
pub fn roll(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}

/// Bernoulli trial: succeeds when the roll lands strictly below `chance`
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    roll(rng) < chance
}

/// Largest value representable by a 53-bit `[0, 1)` draw
const MAX_ROLL: f64 = 1.0 - 1.0 / (1u64 << 53) as f64;

/// RNG that yields a scripted sequence of `[0, 1)` rolls
///
/// Each call to `gen::<f64>()` consumes one scripted roll. Once the script is
/// exhausted the fallback roll is returned forever.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    rolls: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    /// Create a scripted RNG; exhausted scripts fall back to 0.5
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        ScriptedRng {
            rolls: rolls.into_iter().collect(),
            fallback: 0.5,
        }
    }

    /// A source that always rolls `value`
    pub fn constant(value: f64) -> Self {
        Self::new(std::iter::empty()).with_fallback(value)
    }

    /// Set the roll returned after the script runs out
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of scripted rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }

    /// Encode a roll so that rand's `Standard` f64 sampling decodes it exactly
    fn encode(value: f64) -> u64 {
        let clamped = value.clamp(0.0, MAX_ROLL);
        ((clamped * (1u64 << 53) as f64) as u64) << 11
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.rolls.pop_front().unwrap_or(self.fallback);
        Self::encode(value)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
