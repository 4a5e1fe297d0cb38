//! Monte Carlo estimation of π.
//!
//! The module is organised around the three phases of one estimate:
//!
//! 1. [`partition`](partition::partition) splits the requested budget into
//!    one chunk per worker
//! 2. [`sampler`] draws each chunk and counts unit-circle hits (map)
//! 3. [`estimator`] folds the partial counts and scales the hit ratio
//!    (reduce)
//!
//! [`config`] carries the two inputs (sample budget, worker count) and
//! [`error`] the failure taxonomy.

pub mod config;
pub mod error;
pub mod estimator;
pub mod partition;
pub mod sampler;

pub use config::{EstimatorConfig, EstimatorConfigBuilder, DEFAULT_WORKERS};
pub use error::EstimatorError;
pub use estimator::{combine, estimate, estimate_with_defaults, MonteCarloEstimator};
pub use sampler::{sample, sample_with_rng, PartialResult};
