//! `asld-inspect` — Decodes one document, dispatches it by type and
//! prints what the engine made of it.
//!
//! Prints the type, its ancestors, how many of its declared properties are
//! set, the keys the vocabulary does not know, and the re-serialized
//! document.
//!
//! **Usage:**
//! ```
//! asld-inspect <FILE> [--strict] [--log-level <filter>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use asld::resolver::{Callback, DocumentResolver};
use asld::streams::{self, Node, TYPE_NAMES};
use asld::DecodeOptions;
use clap::Parser;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Inspect an ActivityStreams document.
#[derive(Parser)]
#[command(name = "asld-inspect", about = "Decode and describe an ActivityStreams document")]
struct Args {
    /// JSON document to read.
    file: PathBuf,

    /// Reject values that match none of their property's kinds.
    #[arg(long)]
    strict: bool,

    /// Log filter (e.g. `warn`, `asld=trace`).
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

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as JSON", args.file.display()))?;
    let Value::Object(document) = value else {
        bail!("{} is not a JSON object", args.file.display());
    };

    let options = if args.strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::lenient()
    };
    let callbacks = TYPE_NAMES
        .iter()
        .map(|name| Callback::named(*name, |_: &mut (), node: Node| node))
        .collect();
    let resolver = DocumentResolver::new(Arc::new(streams::manager()), callbacks)
        .context("Failed to build the resolver")?
        .with_options(options);
    debug!(file = %args.file.display(), strict = args.strict, "resolving");

    let node = resolver
        .resolve(&mut (), &document)
        .with_context(|| format!("Failed to resolve {}", args.file.display()))?;
    let record = node.record();

    println!("Type:        {}", node.type_name());
    println!("Ancestors:   {}", list(record.class().extends));
    println!(
        "Properties:  {} set of {} declared",
        record.properties().count(),
        record.entry().properties().len()
    );
    let unknown: Vec<&str> = record.unknown().keys().map(String::as_str).collect();
    println!("Unknown:     {}", list(&unknown));
    println!();
    println!("{}", streams::to_string_pretty(&node)?);
    Ok(())
}

fn list(items: &[&str]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
