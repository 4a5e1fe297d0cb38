//! Unit-circle hit sampler (the map side of the pipeline).
//!
//! Each invocation draws points uniformly from the unit square `[0, 1)²`
//! and counts those landing strictly inside the unit circle. The result
//! carries both counts so the aggregator can form the ratio after folding
//! an arbitrary number of invocations together.

use crate::rng::SamplerRng;

/// Outcome of a single sampler invocation.
///
/// A pair of counts `(inside, total)` with `inside <= total`. Produced
/// once per worker and consumed exactly once by the aggregator's fold.
///
/// # Examples
///
/// ```rust
/// use picarlo_kernel::mc::PartialResult;
///
/// let a = PartialResult { inside: 3, total: 5 };
/// let merged = PartialResult::ZERO.combine(a);
/// assert_eq!(merged, a);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialResult {
    /// Points that landed strictly inside the unit circle.
    pub inside: u64,
    /// Points sampled in total.
    pub total: u64,
}

impl PartialResult {
    /// The fold identity `(0, 0)`.
    pub const ZERO: Self = Self {
        inside: 0,
        total: 0,
    };

    /// Component-wise sum with another result.
    ///
    /// Associative and commutative with [`PartialResult::ZERO`] as the
    /// identity, so fold order never changes the outcome.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            inside: self.inside + other.inside,
            total: self.total + other.total,
        }
    }
}

/// Samples `n` uniform points in `[0, 1)²` and counts unit-circle hits.
///
/// Each call owns a fresh entropy-seeded generator, so any number of
/// workers may run this concurrently without shared state. `sample(0)` is
/// permitted and returns `(0, 0)`.
///
/// # Returns
///
/// `(inside, n)` with `0 <= inside <= n`.
///
/// # Examples
///
/// ```rust
/// use picarlo_kernel::mc::sample;
///
/// let result = sample(1_000);
/// assert_eq!(result.total, 1_000);
/// assert!(result.inside <= result.total);
/// ```
pub fn sample(n: u64) -> PartialResult {
    let mut rng = SamplerRng::from_entropy();
    sample_with_rng(n, &mut rng)
}

/// Samples `n` points using the supplied generator.
///
/// Backs [`sample`]; tests and benchmarks call it directly with a seeded
/// [`SamplerRng`] for deterministic draws.
pub fn sample_with_rng(n: u64, rng: &mut SamplerRng) -> PartialResult {
    let mut inside = 0u64;
    for _ in 0..n {
        let (x, y) = rng.gen_point();
        // Strict inequality: the boundary counts as outside.
        if x * x + y * y < 1.0 {
            inside += 1;
        }
    }
    PartialResult { inside, total: n }
}
