//! Rayon-based worker-pool dispatch.
//!
//! The estimator runs on a dedicated fixed-size pool rather than the
//! global rayon pool, so the degree of parallelism is exactly the
//! configured worker count.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Builds a dedicated pool of exactly `n_workers` threads.
///
/// # Errors
///
/// Returns the underlying build error when the threads cannot be spawned.
pub fn worker_pool(n_workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new().num_threads(n_workers).build()
}

/// Dispatches one task per item on `pool` and joins on all of them.
///
/// Results come back in item order regardless of completion order, so
/// callers never observe scheduling. A panicking task propagates out of
/// the join and fails the caller; there is no retry or partial result.
pub fn map_join<T, R, F>(pool: &ThreadPool, items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    pool.install(|| items.par_iter().map(mapper).collect())
}
