//! Picarlo CLI - Command Line Driver for the Monte Carlo π Estimator
//!
//! A single flagless invocation runs the fixed demonstration: 10,000,000
//! samples spread over 4 workers, printing the estimate, the reference
//! value of π, and the absolute error.
//!
//! # Architecture
//!
//! The service layer is a thin driver: all estimation logic lives in
//! `picarlo_kernel`. This binary only initialises logging, parses the
//! (empty) command line, and formats the result.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod demo;
mod error;

pub use error::{CliError, Result};

/// Picarlo Monte Carlo π estimator CLI
#[derive(Parser)]
#[command(name = "picarlo")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    demo::run()
}
