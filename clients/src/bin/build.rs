//! `asld-build` — Writes the vocabulary artifacts to the output directory.
//!
//! **Outputs:**
//! - `<out>/vocabulary.json` — the vocabulary as a JSON-LD ontology
//! - `<out>/context.json` — the default `@context`
//!
//! **Usage:**
//! ```
//! asld-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use asld_conformance::validators::artifacts;
use asld_vocab::Vocabulary;
use clap::Parser;

/// Build the vocabulary artifacts.
#[derive(Parser)]
#[command(name = "asld-build", about = "Write the asld vocabulary artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let vocab = Vocabulary::full();

    println!(
        "ActivityStreams vocabulary v{}: {} namespaces, {} classes, {} properties",
        vocab.version,
        vocab.namespaces.len(),
        vocab.class_count(),
        vocab.property_count()
    );
    for module in &vocab.namespaces {
        println!(
            "  {:<8} {:>2} classes, {:>2} properties",
            module.namespace.prefix,
            module.classes.len(),
            module.properties.len()
        );
    }

    for path in artifacts::write(vocab, &args.out)? {
        println!("  Written: {}", path.display());
    }

    println!("Build complete.");
    Ok(())
}
