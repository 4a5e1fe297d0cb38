//! Parallel aggregation of sampler results (the reduce side).
//!
//! [`MonteCarloEstimator`] orchestrates one estimate: partition the
//! budget, dispatch the sampler across a fixed worker pool, fold the
//! partial counts, scale the hit ratio by 4. The free functions at the
//! bottom mirror the same pipeline for one-shot callers.

use super::config::{EstimatorConfig, DEFAULT_WORKERS};
use super::error::EstimatorError;
use super::partition::partition;
use super::sampler::{sample, PartialResult};
use crate::parallel;

/// Map-reduce estimator for π.
///
/// Holds a validated configuration; every call to
/// [`estimate`](MonteCarloEstimator::estimate) runs the full
/// partition → sample → reduce pass with no state carried between calls.
///
/// # Examples
///
/// ```rust
/// use picarlo_kernel::mc::{EstimatorConfig, MonteCarloEstimator};
///
/// let config = EstimatorConfig::builder()
///     .total_samples(100_000)
///     .n_workers(4)
///     .build()
///     .unwrap();
///
/// let estimator = MonteCarloEstimator::new(config).unwrap();
/// let pi = estimator.estimate().unwrap();
/// assert!((0.0..=4.0).contains(&pi));
/// ```
#[derive(Debug)]
pub struct MonteCarloEstimator {
    config: EstimatorConfig,
}

impl MonteCarloEstimator {
    /// Creates an estimator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when the sample budget or the
    /// worker count is zero.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Runs one full partition → sample → reduce pass.
    ///
    /// Dispatches one sampler invocation per worker on a dedicated pool
    /// and blocks until all of them have finished before reducing; a
    /// panicking worker propagates and aborts the whole call. The fold is
    /// associative and commutative, so completion order cannot change the
    /// result.
    ///
    /// # Returns
    ///
    /// The estimate `4 * inside / total`, always within `[0.0, 4.0]`.
    ///
    /// # Errors
    ///
    /// * [`EstimatorError::DegenerateInput`] when `total_samples <
    ///   n_workers` leaves every chunk empty (the denominator would be
    ///   zero)
    /// * [`EstimatorError::WorkerPool`] when the pool cannot be built
    pub fn estimate(&self) -> Result<f64, EstimatorError> {
        let EstimatorConfig {
            total_samples,
            n_workers,
        } = self.config;

        let plan = partition(total_samples, n_workers);
        if plan.iter().sum::<u64>() == 0 {
            return Err(EstimatorError::DegenerateInput {
                total_samples,
                n_workers,
            });
        }

        let pool = parallel::worker_pool(n_workers)?;
        let partials = parallel::map_join(&pool, &plan, |&chunk| sample(chunk));

        let folded = partials.into_iter().fold(PartialResult::ZERO, combine);

        Ok(4.0 * folded.inside as f64 / folded.total as f64)
    }
}

/// Component-wise sum of two partial results.
///
/// The reduce operation of the pipeline: associative and commutative with
/// [`PartialResult::ZERO`] as the identity.
#[must_use]
pub fn combine(acc: PartialResult, result: PartialResult) -> PartialResult {
    acc.combine(result)
}

/// Estimates π from `total_samples` points spread over `n_workers`
/// workers.
///
/// One-shot wrapper over [`MonteCarloEstimator`].
///
/// # Errors
///
/// Same taxonomy as [`MonteCarloEstimator::estimate`], plus the
/// invalid-argument errors from configuration validation.
pub fn estimate(total_samples: u64, n_workers: usize) -> Result<f64, EstimatorError> {
    let config = EstimatorConfig {
        total_samples,
        n_workers,
    };
    MonteCarloEstimator::new(config)?.estimate()
}

/// Estimates π with the default pool of [`DEFAULT_WORKERS`] workers.
///
/// # Errors
///
/// See [`estimate`].
pub fn estimate_with_defaults(total_samples: u64) -> Result<f64, EstimatorError> {
    estimate(total_samples, DEFAULT_WORKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimator_creation() {
        let config = EstimatorConfig::new(10_000);
        let estimator = MonteCarloEstimator::new(config).unwrap();
        assert_eq!(estimator.config().total_samples, 10_000);
        assert_eq!(estimator.config().n_workers, DEFAULT_WORKERS);
    }

    #[test]
    fn test_estimator_rejects_zero_samples() {
        let config = EstimatorConfig {
            total_samples: 0,
            n_workers: 4,
        };
        let err = MonteCarloEstimator::new(config).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidSampleCount { got: 0 }));
    }

    #[test]
    fn test_estimate_rejects_zero_workers() {
        let err = estimate(1_000, 0).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidWorkerCount { got: 0 }));
    }

    #[test]
    fn test_estimate_within_bounds() {
        let pi = estimate(50_000, 4).unwrap();
        assert!((0.0..=4.0).contains(&pi), "estimate {} out of bounds", pi);
    }

    #[test]
    fn test_estimate_degenerate_input() {
        let err = estimate(3, 4).unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::DegenerateInput {
                total_samples: 3,
                n_workers: 4,
            }
        ));
    }

    #[test]
    fn test_estimate_one_sample_per_worker() {
        // 4 samples over 4 workers is degenerate but non-zero: exactly one
        // point each, so the estimate must come back rather than error.
        let pi = estimate(4, 4).unwrap();
        assert!((0.0..=4.0).contains(&pi));
    }

    #[test]
    fn test_estimate_single_worker() {
        let pi = estimate(10_000, 1).unwrap();
        assert!((0.0..=4.0).contains(&pi));
    }

    #[test]
    fn test_estimate_with_defaults_uses_four_workers() {
        // 4 samples with the default pool is the 1-per-worker boundary.
        assert!(estimate_with_defaults(4).is_ok());
        assert!(matches!(
            estimate_with_defaults(3),
            Err(EstimatorError::DegenerateInput { n_workers: 4, .. })
        ));
    }

    #[test]
    fn test_combine_matches_component_sum() {
        let acc = PartialResult::ZERO;
        let result = PartialResult {
            inside: 3,
            total: 5,
        };
        assert_eq!(combine(acc, result), result);
    }

    #[test]
    fn test_estimate_rough_convergence() {
        // ~13 standard errors of slack at this budget; not a tight bound,
        // just a guard against a broken ratio or partition.
        let pi = estimate(200_000, 4).unwrap();
        assert!((pi - std::f64::consts::PI).abs() < 0.05, "estimate {}", pi);
    }
}
