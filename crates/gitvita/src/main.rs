// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! gitvita: draft LinkedIn-style experience summaries from local git history
//!
//! Prints the result as JSON on stdout. Logs go to stderr; errors are
//! reported there too and end the process with a non-zero status.

use clap::Parser;
use gitvita::{AppError, Config, pipeline};
use tracing::debug;

fn main() {
    let config = Config::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&config) {
        debug!(exit_code = err.exit_code(), "gitvita failed");
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let report = pipeline::run(config)?;
    println!("{}", report.to_json()?);
    Ok(())
}
