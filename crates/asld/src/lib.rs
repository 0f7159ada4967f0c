//! Typed ActivityStreams documents over JSON-LD.
//!
//! `asld` reads ActivityStreams JSON into typed values and writes them back
//! without losing anything it did not understand. Property values are
//! polymorphic: each one holds exactly one of the kinds its property
//! declares, an IRI reference, or the original JSON verbatim.
//!
//! # Decoding
//!
//! ```
//! use asld::streams::{self, Node};
//! use asld::DecodeOptions;
//!
//! let manager = streams::manager();
//! let node = streams::from_str(
//!     r#"{
//!         "@context": ["https://www.w3.org/ns/activitystreams", {"toot": "http://joinmastodon.org/ns#"}],
//!         "type": "Create",
//!         "actor": "https://example.com/users/alice",
//!         "object": {"type": "Note", "contentMap": {"en": "Hello"}},
//!         "toot:flavour": "vanilla"
//!     }"#,
//!     &manager,
//!     DecodeOptions::default(),
//! )
//! .unwrap();
//!
//! let Node::Create(create) = &node else { unreachable!() };
//! let object = create.list("object").unwrap().get(0).unwrap();
//! assert!(object.is_type("Note"));
//! assert_eq!(create.unknown()["toot:flavour"], "vanilla");
//! ```
//!
//! # Dispatch
//!
//! ```
//! use std::sync::Arc;
//! use asld::resolver::{Callback, DocumentResolver};
//! use asld::streams::{self, Follow};
//! use serde_json::json;
//!
//! let resolver = DocumentResolver::new(
//!     Arc::new(streams::manager()),
//!     vec![Callback::on::<Follow, _>(|follows: &mut u32, _| *follows += 1)],
//! )
//! .unwrap();
//!
//! let mut follows = 0;
//! let doc = json!({"@context": "https://www.w3.org/ns/activitystreams", "type": "Follow"});
//! resolver.resolve(&mut follows, doc.as_object().unwrap()).unwrap();
//! assert_eq!(follows, 1);
//! ```
//!
//! # Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`alias`] | `@context` alias maps |
//! | [`iri`], [`literal`], [`language`] | leaf value kinds |
//! | [`value`], [`list`] | functional and non-functional property values |
//! | [`record`] | documents of one type, with the unknown bag |
//! | [`catalog`] | precomputed type relations |
//! | [`manager`] | deserializer registry and decoding policy |
//! | [`streams`] | one Rust type per vocabulary type |
//! | [`resolver`] | dispatch strategies |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod alias;
pub mod catalog;
pub mod error;
pub mod iri;
pub mod language;
pub mod list;
pub mod literal;
pub mod manager;
pub mod record;
pub mod resolver;
pub mod streams;
pub mod value;

pub use alias::AliasMap;
pub use catalog::{Kind, TypeCatalog};
pub use error::{Error, Result};
pub use iri::Iri;
pub use language::LanguageMap;
pub use list::{Cursor, PropertyList};
pub use literal::{Datatype, Literal};
pub use manager::{DecodeOptions, Decoder, Manager, Registration};
pub use record::{Slot, TypeRecord};
pub use value::{Member, PropertyValue};
