//! Serializers for the vocabulary.
//!
//! - **JSON-LD** ([`jsonld`]) — the vocabulary as an ontology document, output
//!   to `public/vocabulary.json`, and the default document `@context`, output
//!   to `public/context.json`.

pub mod jsonld;
