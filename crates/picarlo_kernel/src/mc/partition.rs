//! Sample-budget partitioning across the worker pool.

/// Splits `total_samples` into one chunk per worker.
///
/// Every entry equals `total_samples / n_workers` (truncating division),
/// so the effective budget is `(total_samples / n_workers) * n_workers`:
/// the remainder `total_samples % n_workers` is dropped, shorting the run
/// by up to `n_workers - 1` samples. The caller must treat an all-zero
/// plan (budget smaller than the pool) as degenerate before dispatching.
///
/// # Panics
///
/// Panics when `n_workers` is zero; callers validate the worker count
/// first.
pub fn partition(total_samples: u64, n_workers: usize) -> Vec<u64> {
    let chunk = total_samples / n_workers as u64;
    vec![chunk; n_workers]
}
