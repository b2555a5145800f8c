// random.rs - Uniform draws consumed by the stochastic rule sets

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// One independent uniform draw per decision point.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn index_below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "index_below(0)");
        ((self.next_unit() * n as f64) as usize).min(n - 1)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<G>(pub G);

impl<G: Rng> RandomSource for RngSource<G> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

pub type DefaultSource = RngSource<SmallRng>;

impl RngSource<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_os_rng())
    }

    /// Seeded when a seed is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}
