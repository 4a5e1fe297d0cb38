//! Random sources for the sampling workers.
//!
//! Each worker owns its own [`SamplerRng`]; nothing is shared across
//! workers. The estimation path seeds from OS entropy per invocation.
//! Seeded construction exists for tests and benchmarks and promises
//! reproducibility only for that single generator, never for a parallel
//! estimate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Uniform;

#[cfg(test)]
mod tests;

/// Uniform `[0, 1)` source backing one sampling worker.
#[derive(Clone, Debug)]
pub struct SamplerRng {
    inner: StdRng,
    unit: Uniform<f64>,
}

impl SamplerRng {
    /// Creates a generator seeded from OS entropy.
    ///
    /// This is what the estimation path uses, once per worker invocation.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            unit: Uniform::new(0.0, 1.0),
        }
    }

    /// Creates a generator from an explicit seed.
    ///
    /// For tests and benchmarks that need deterministic draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            unit: Uniform::new(0.0, 1.0),
        }
    }

    /// Draws one value uniformly from `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.sample(self.unit)
    }

    /// Draws one point uniformly from the unit square `[0, 1)²`.
    #[inline]
    pub fn gen_point(&mut self) -> (f64, f64) {
        (self.gen_uniform(), self.gen_uniform())
    }
}
