// Copyright 2025 Cowboy AI, LLC.

//! Prints the structural record demo to stdout.
//!
//! Command-line arguments are ignored. Diagnostics go to stderr and are
//! controlled by `RUST_LOG`.

use anonym_records::{run_with_directory, DemoConfig};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_directory(&config.directory(), &mut out).context("record demo failed")?;

    Ok(())
}
