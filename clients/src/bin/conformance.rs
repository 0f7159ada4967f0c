//! `asld-conformance` — Runs the conformance suite over the vocabulary,
//! the built artifacts and the round-trip fixtures.
//!
//! **Usage:**
//! ```
//! asld-conformance [--artifacts <path>] [--fixtures <path>] [--log-level <filter>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use asld_conformance::{run_all, WorkspacePaths};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Run the asld conformance suite.
#[derive(Parser)]
#[command(
    name = "asld-conformance",
    about = "Validate the asld vocabulary, artifacts and fixtures"
)]
struct Args {
    /// Directory holding the built artifacts.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Directory of round-trip fixture documents.
    #[arg(long, default_value = "fixtures")]
    fixtures: PathBuf,

    /// Log filter (e.g. `warn`, `asld=debug`).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let paths = WorkspacePaths {
        artifacts: args.artifacts,
        fixtures: args.fixtures,
    };
    let report = run_all(&paths)?;

    println!("asld Conformance Report");
    println!("=======================");
    println!();
    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    let warned = report.warning_count();
    println!();
    println!(
        "Summary: {} passed, {warned} warnings, {failed} failed",
        report.results.len() - failed - warned
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
