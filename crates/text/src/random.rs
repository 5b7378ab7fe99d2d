//! Random string generation
//!
//! The generator is split from its character source so callers (and tests)
//! can substitute a deterministic source without touching global state.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies one character at a time to [`rand_str`].
pub trait CharSource {
    /// Produce the next character.
    fn next_char(&mut self) -> char;
}

/// Alphanumeric character source over a seedable RNG.
#[derive(Debug)]
pub struct AlphanumericSource {
    rng: StdRng,
}

impl AlphanumericSource {
    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        AlphanumericSource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        AlphanumericSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CharSource for AlphanumericSource {
    fn next_char(&mut self) -> char {
        self.rng.sample(Alphanumeric) as char
    }
}

/// Build a string of `length` characters drawn from `source`.
pub fn rand_str(length: usize, source: &mut dyn CharSource) -> String {
    (0..length).map(|_| source.next_char()).collect()
}
