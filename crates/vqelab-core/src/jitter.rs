//! Noise sources for the convergence trace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Amplitude of the symmetric jitter: samples fall in `[-JITTER_SCALE / 2, JITTER_SCALE / 2)`.
pub const JITTER_SCALE: f64 = 0.01;

/// Source of the symmetric noise added to each energy estimate.
pub trait Jitter {
    /// Draw the next jitter value.
    fn sample(&mut self) -> f64;
}

/// Uniform jitter from a small seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: SmallRng,
}

impl SeededJitter {
    /// Deterministic jitter from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Jitter seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Jitter for SeededJitter {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(-0.5..0.5) * JITTER_SCALE
    }
}

/// Noise-free jitter: every estimate lands on the reference energy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

impl<J: Jitter + ?Sized> Jitter for Box<J> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}
