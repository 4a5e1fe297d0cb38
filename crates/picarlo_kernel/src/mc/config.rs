//! Estimator configuration.
//!
//! Provides [`EstimatorConfig`] for the two inputs of an estimate (sample
//! budget, worker count) and a builder for fluent construction.

use super::error::EstimatorError;

/// Default worker-pool size.
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for a Monte Carlo π estimate.
///
/// Carries the whole configuration surface of the pipeline: how many
/// points to sample and how many parallel workers to spread them over.
/// Use the builder via [`EstimatorConfig::builder()`] or the
/// [`EstimatorConfig::new`] shorthand for the default pool size.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `n_workers` | 4 | Parallel sampling workers |
///
/// # Examples
///
/// ```rust
/// use picarlo_kernel::mc::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .total_samples(1_000_000)
///     .n_workers(8)
///     .build()
///     .unwrap();
/// assert_eq!(config.n_workers, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Total number of points to sample across all workers.
    pub total_samples: u64,
    /// Number of parallel sampling workers.
    pub n_workers: usize,
}

impl EstimatorConfig {
    /// Creates a configuration with the default pool of
    /// [`DEFAULT_WORKERS`] workers.
    pub fn new(total_samples: u64) -> Self {
        Self {
            total_samples,
            n_workers: DEFAULT_WORKERS,
        }
    }

    /// Creates a new builder.
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// * [`EstimatorError::InvalidSampleCount`] when the budget is zero
    /// * [`EstimatorError::InvalidWorkerCount`] when the pool size is zero
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.total_samples == 0 {
            return Err(EstimatorError::InvalidSampleCount {
                got: self.total_samples,
            });
        }
        if self.n_workers == 0 {
            return Err(EstimatorError::InvalidWorkerCount { got: self.n_workers });
        }
        Ok(())
    }
}

/// Builder for [`EstimatorConfig`].
#[derive(Debug, Default)]
pub struct EstimatorConfigBuilder {
    total_samples: Option<u64>,
    n_workers: Option<usize>,
}

impl EstimatorConfigBuilder {
    /// Sets the total sample budget.
    pub fn total_samples(mut self, total_samples: u64) -> Self {
        self.total_samples = Some(total_samples);
        self
    }

    /// Sets the worker-pool size (default: [`DEFAULT_WORKERS`]).
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if any parameter is invalid; an unset
    /// sample budget is rejected the same way as an explicit zero.
    pub fn build(self) -> Result<EstimatorConfig, EstimatorError> {
        let config = EstimatorConfig {
            total_samples: self.total_samples.unwrap_or(0),
            n_workers: self.n_workers.unwrap_or(DEFAULT_WORKERS),
        };

        config.validate()?;
        Ok(config)
    }
}
