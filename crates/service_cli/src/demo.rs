//! The fixed demonstration run.
//!
//! Estimates π from 10,000,000 samples on a pool of 4 workers and prints
//! the estimate next to the reference value and the absolute error.

use picarlo_kernel::mc::{estimate, DEFAULT_WORKERS};
use tracing::info;

use crate::Result;

/// Sample budget of the demonstration run.
const DEMO_SAMPLES: u64 = 10_000_000;

/// Runs the demonstration with the fixed budget and default pool.
///
/// # Returns
///
/// `Ok(())` on success, `Err` when the estimation pipeline fails.
pub fn run() -> Result<()> {
    run_with(DEMO_SAMPLES, DEFAULT_WORKERS)
}

/// Runs the demonstration with an explicit budget and pool size.
fn run_with(total_samples: u64, n_workers: usize) -> Result<()> {
    info!(total_samples, n_workers, "starting estimation");
    println!(
        "Estimating π using {} samples with {} workers...",
        total_samples, n_workers
    );

    let pi_estimate = estimate(total_samples, n_workers)?;
    let reference = std::f64::consts::PI;

    println!("Estimated π: {}", pi_estimate);
    println!("Actual π:    {}", reference);
    println!("Error:       {}", (pi_estimate - reference).abs());

    Ok(())
}
