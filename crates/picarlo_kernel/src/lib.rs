//! # Picarlo Kernel
//!
//! Map-reduce Monte Carlo engine for estimating π.
//!
//! This crate provides:
//! - A sampler that draws uniform points in the unit square and counts
//!   those landing strictly inside the unit circle ([`mc::sampler`])
//! - Partitioning of a sample budget across a fixed worker pool
//!   ([`mc::partition`])
//! - A parallel aggregator that folds per-worker counts into the final
//!   estimate `4 * inside / total` ([`mc::estimator`])
//!
//! ## Pipeline
//!
//! One estimate is three sequential phases: partition the budget, sample
//! every chunk in parallel, reduce the partial counts. Workers share no
//! mutable state; each owns its own random source, so the reduction is
//! insensitive to completion order.
//!
//! All state is local to a single [`estimate`] call; there is no engine
//! state to reset between runs.

#![warn(missing_docs)]

pub mod mc;
pub mod parallel;
pub mod rng;

pub use mc::{
    combine, estimate, estimate_with_defaults, sample, EstimatorConfig, EstimatorError,
    MonteCarloEstimator, PartialResult, DEFAULT_WORKERS,
};
