//! Injectable random source driving every probabilistic branch.
//!
//! A simulation owns exactly one source, passed in at construction. Replaying
//! the same sequence of draws reproduces the same trace bit for bit.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cell::Direction;

/// The two kinds of draw the movement rule needs.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_in_range(&mut self, low: i64, high: i64) -> i64;

    /// Uniform pick of one element from a small non-empty set.
    fn choose_direction(&mut self, options: &[Direction]) -> Direction;

    /// Roll `1..=100` and compare against `probability * 100`.
    fn chance(&mut self, probability: f64) -> bool {
        let roll = self.int_in_range(1, 100);
        roll as f64 <= probability * 100.0
    }
}

impl RandomSource for StdRng {
    fn int_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }

    fn choose_direction(&mut self, options: &[Direction]) -> Direction {
        options.choose(self).copied().unwrap_or(Direction::Up)
    }
}

/// Seeded standard generator, the default source for production runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
