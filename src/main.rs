//! Benchmark runner for the naive, horizontal and tiled kernels.
//!
//! ```text
//! tilebench <TRIALS> <POWER> [--size N] [--seed SEED] [--log-level LEVEL]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tilebench::config::Args;
use tilebench::{BenchmarkRunner, report};

fn main() -> Result<()> {
    // Wrong argument count or non-numeric arguments: clap prints usage and
    // exits non-zero before any matrix is allocated.
    let args = Args::parse();
    setup_logging(&args.log_level);

    let config = args.to_config().context("refusing to start benchmark")?;
    report::print_header(&config);

    let mut runner = BenchmarkRunner::new(config)?;
    let summary = runner.run_with(report::print_sample)?;

    report::print_summary(&summary);
    Ok(())
}

/// Diagnostics go to stderr so they never mix with the timing lines.
fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
