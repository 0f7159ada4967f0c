//! asld conformance suite.
//!
//! Validates what the workspace ships: the vocabulary data, the JSON-LD
//! artifacts built from it, and a directory of real-world documents that
//! must survive a decode/encode round trip.
//!
//! # Conformance Scope
//!
//! | Component | Checks |
//! |-----------|--------|
//! | Vocabulary classes | relation targets known, disjointness symmetric, `extended_by` inverse of `extends` |
//! | Vocabulary properties | domains and ranges known, natural-language flags, IRI scheme requirement |
//! | Artifacts (JSON-LD) | `vocabulary.json` and `context.json` present, well-formed, complete |
//! | Fixtures | every `*.json` decodes, re-encodes and decodes to an equal node |
//!
//! # Entry Point
//!
//! ```no_run
//! use asld_conformance::{run_all, WorkspacePaths};
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths {
//!     artifacts: PathBuf::from("public"),
//!     fixtures: PathBuf::from("fixtures"),
//! };
//! let report = run_all(&paths).expect("conformance run");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths the conformance runner reads.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Directory holding the built artifacts (`vocabulary.json`, `context.json`).
    pub artifacts: std::path::PathBuf,
    /// Directory of round-trip fixture documents.
    pub fixtures: std::path::PathBuf,
}

/// Runs every validator and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Vocabulary class relations and catalog capabilities
/// 2. Vocabulary property declarations
/// 3. JSON-LD artifacts
/// 4. Round-trip fixtures
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::vocab::validate());
    report.extend(validators::properties::validate());
    report.extend(validators::artifacts::validate(&paths.artifacts)?);
    report.extend(validators::fixtures::validate(&paths.fixtures)?);

    Ok(report)
}
