//! Round-trip fixture validator.
//!
//! Every `*.json` file under the fixtures directory is decoded, encoded,
//! and decoded again; both decodes must agree, and encoding must be
//! stable.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use asld::streams;
use asld::DecodeOptions;
use tracing::debug;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "fixtures/round_trip";

/// Round-trips every fixture under `fixtures`.
///
/// # Errors
///
/// Returns an error if a fixture file cannot be read.
pub fn validate(fixtures: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    if !fixtures.is_dir() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("No fixtures directory at {}", fixtures.display()),
        ));
        return Ok(report);
    }

    let manager = streams::manager();
    let mut checked = 0usize;
    let mut failures = Vec::new();

    for entry in WalkDir::new(fixtures)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|x| x == "json"))
    {
        let path = entry.path();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        checked += 1;
        debug!(fixture = %path.display(), "round-tripping");
        if let Err(problem) = round_trip(&text, &manager) {
            failures.push(format!("{}: {problem}", path.display()));
        }
    }

    if checked == 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("No *.json fixtures under {}", fixtures.display()),
        ));
    } else {
        report.push(TestResult::check(
            VALIDATOR,
            format!("All {checked} fixtures round-trip"),
            format!("{} of {checked} fixtures do not round-trip", failures.len()),
            failures,
        ));
    }
    Ok(report)
}

/// Decode, encode, decode, encode. Returns what went wrong.
fn round_trip(text: &str, manager: &asld::Manager) -> std::result::Result<(), String> {
    let options = DecodeOptions::default();
    let first = streams::from_str(text, manager, options).map_err(|e| format!("decode: {e}"))?;
    let encoded = streams::serialize(&first);
    let second = streams::to_node(&encoded, manager, options)
        .map_err(|e| format!("decode after encode: {e}"))?;
    // Encoding supplies a default @context when the fixture has none.
    let (mut a, mut b) = (first, second.clone());
    a.record_mut().unknown_mut().remove("@context");
    b.record_mut().unknown_mut().remove("@context");
    if a != b {
        return Err(format!("{} changed across a round trip", a.type_name()));
    }
    if streams::serialize(&second) != encoded {
        return Err("encoding is not stable".to_string());
    }
    Ok(())
}
