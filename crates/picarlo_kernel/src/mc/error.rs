//! Error types for the estimation pipeline.

use thiserror::Error;

/// Failures surfaced by [`estimate`](crate::mc::estimate) and friends.
///
/// Every variant is fatal for the call that produced it; nothing is
/// retried or recovered internally.
///
/// # Variants
/// - `InvalidSampleCount`: requested sample budget is zero
/// - `InvalidWorkerCount`: requested worker-pool size is zero
/// - `DegenerateInput`: partitioning left every worker with zero samples
/// - `WorkerPool`: the worker pool could not be constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// Requested sample budget is zero.
    #[error("invalid sample count: {got} (must be at least 1)")]
    InvalidSampleCount {
        /// The rejected budget.
        got: u64,
    },

    /// Requested worker-pool size is zero.
    #[error("invalid worker count: {got} (must be at least 1)")]
    InvalidWorkerCount {
        /// The rejected pool size.
        got: usize,
    },

    /// Partitioning left every worker with zero samples, so the estimate
    /// denominator would be zero.
    #[error("{total_samples} samples across {n_workers} workers leaves every worker empty")]
    DegenerateInput {
        /// The requested budget.
        total_samples: u64,
        /// The requested pool size.
        n_workers: usize,
    },

    /// The worker pool could not be constructed.
    #[error("worker pool failure: {0}")]
    WorkerPool(String),
}

impl From<rayon::ThreadPoolBuildError> for EstimatorError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(err.to_string())
    }
}
