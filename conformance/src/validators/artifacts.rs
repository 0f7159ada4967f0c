//! JSON-LD artifact validator, and the writer that produces the artifacts.
//!
//! Two files live in the artifacts directory:
//! - [`VOCABULARY_FILE`]: the vocabulary as a JSON-LD ontology
//! - [`CONTEXT_FILE`]: the default `@context` applied to documents without one

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asld_vocab::serializer::jsonld;
use asld_vocab::Vocabulary;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

/// File name of the vocabulary document.
pub const VOCABULARY_FILE: &str = "vocabulary.json";
/// File name of the default context document.
pub const CONTEXT_FILE: &str = "context.json";

const VALIDATOR: &str = "artifacts/jsonld";

/// Writes both artifacts into `out`, creating it if needed. Returns the
/// written paths.
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be written.
pub fn write(vocab: &Vocabulary, out: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let context = serde_json::json!({ "@context": jsonld::default_context(vocab) });
    let documents = [
        (VOCABULARY_FILE, jsonld::to_json_ld(vocab)),
        (CONTEXT_FILE, context),
    ];
    let mut written = Vec::with_capacity(documents.len());
    for (name, value) in documents {
        let path = out.join(name);
        let text = serde_json::to_string_pretty(&value)
            .with_context(|| format!("Failed to serialize {name}"))?;
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Validates the artifacts in `artifacts` against the live vocabulary.
///
/// A missing or malformed file is reported as a failure, not an error.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let vocab = Vocabulary::full();
    let mut report = ConformanceReport::new();

    if let Some(document) = load(artifacts, VOCABULARY_FILE, &mut report)? {
        validate_vocabulary(vocab, &document, &mut report);
    }
    if let Some(document) = load(artifacts, CONTEXT_FILE, &mut report)? {
        let expected = jsonld::default_context(vocab);
        if document.get("@context") == Some(&expected) {
            report.push(TestResult::pass(VALIDATOR, "context.json matches the default @context"));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                "context.json does not match the default @context",
            ));
        }
    }
    Ok(report)
}

fn load(dir: &Path, name: &str, report: &mut ConformanceReport) -> Result<Option<Value>> {
    let path = dir.join(name);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} not found in {}", dir.display()),
        ));
        return Ok(None);
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match serde_json::from_str::<Value>(&text) {
        Ok(value) if value.is_object() => Ok(Some(value)),
        Ok(_) => {
            report.push(TestResult::fail(VALIDATOR, format!("{name} is not a JSON object")));
            Ok(None)
        }
        Err(err) => {
            report.push(TestResult::fail(VALIDATOR, format!("{name} is not valid JSON: {err}")));
            Ok(None)
        }
    }
}

fn validate_vocabulary(vocab: &Vocabulary, document: &Value, report: &mut ConformanceReport) {
    let context = document.get("@context").and_then(Value::as_object);
    let graph = document.get("@graph").and_then(Value::as_array);
    let (Some(context), Some(graph)) = (context, graph) else {
        report.push(TestResult::fail(
            VALIDATOR,
            "vocabulary.json needs an @context object and an @graph array",
        ));
        return;
    };

    let missing_prefixes: Vec<String> = vocab
        .namespaces
        .iter()
        .map(|m| &m.namespace)
        .filter(|ns| !ns.keyword)
        .filter(|ns| context.get(ns.prefix).and_then(Value::as_str) != Some(ns.iri))
        .map(|ns| format!("{} -> {}", ns.prefix, ns.iri))
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        "vocabulary.json declares every namespace prefix",
        "vocabulary.json is missing namespace prefixes",
        missing_prefixes,
    ));

    let ids: Vec<&str> = graph
        .iter()
        .filter_map(|node| node.get("@id").and_then(Value::as_str))
        .collect();
    let missing_terms: Vec<String> = vocab
        .classes()
        .map(|c| c.id)
        .chain(vocab.properties().map(|p| p.id))
        .filter(|id| !ids.contains(id))
        .map(str::to_string)
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        format!("vocabulary.json describes all {} terms", ids.len()),
        "vocabulary.json is missing terms",
        missing_terms,
    ));
}
