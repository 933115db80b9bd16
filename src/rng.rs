//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps `rand`'s `StdRng` and exposes the
//! handful of draws the scheduler needs: uniform catalog indices, Bernoulli
//! trials for mutation, crossover cut points, and seeds for child generators.
//!
//! ## Example
//!
//! ```rust
//! use class_scheduler::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let room = rng.index(9);
//! assert!(room < 9);
//!
//! let cut = rng.cut_point(11);
//! assert!(cut <= 11);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Draws `u` uniformly from `[0, 1)` and tests `u < probability`, so a
    /// probability of `0.0` never fires and `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Uniform cut point in `0..=len`, both ends inclusive.
    pub fn cut_point(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..=len)
    }

    /// Draws a seed for an independent child generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
