//! CLI error type and result alias.

use picarlo_kernel::mc::EstimatorError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// The estimation pipeline failed.
    #[error("estimation failed: {0}")]
    Estimator(#[from] EstimatorError),
}

/// Result alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
