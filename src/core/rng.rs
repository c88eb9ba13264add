//! Deterministic dice.
//!
//! The turn controller draws die values through the [`DieSource`] trait so
//! that randomness stays at a seam:
//!
//! - [`DiceRng`] is the production source, a seeded ChaCha8 stream. The same
//!   seed always produces the same sequence of rolls, which keeps whole
//!   games replayable.
//! - [`ScriptedDie`] plays back a fixed sequence, for tests and for hosts
//!   that replay a recorded game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of die values in 1..=6.
pub trait DieSource {
    /// Produce the next die value.
    fn roll_die(&mut self) -> u8;
}

/// Seeded dice backed by ChaCha8.
///
/// Deterministic: the same seed yields the same roll sequence.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new dice stream with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DieSource for DiceRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// A die that plays back a fixed sequence of values.
///
/// Panics when the script runs out or contains a value outside 1..=6;
/// feeding it a bad script is a programming error, not a game state.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedDie {
    /// Create a scripted die from a roll sequence.
    #[must_use]
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        let values = values.into();
        assert!(
            values.iter().all(|v| (1..=6).contains(v)),
            "Die script values must be in 1..=6"
        );
        Self { values, next: 0 }
    }

    /// Number of scripted rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.next
    }
}

impl DieSource for ScriptedDie {
    fn roll_die(&mut self) -> u8 {
        let value = *self
            .values
            .get(self.next)
            .expect("Die script exhausted");
        self.next += 1;
        value
    }
}
