//! Typed ActivityStreams documents.
//!
//! Entry points for applications: build the registry with [`manager`],
//! decode a JSON object with [`to_node`], write one back with
//! [`serialize`].
//!
//! ```
//! use asld::streams::{self, Node};
//! use asld::DecodeOptions;
//! use serde_json::json;
//!
//! let manager = streams::manager();
//! let doc = json!({
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Note",
//!     "content": "Hello, world",
//! });
//! let node = streams::to_node(doc.as_object().unwrap(), &manager, DecodeOptions::default()).unwrap();
//! assert!(matches!(node, Node::Note(_)));
//! assert_eq!(streams::serialize(&node)["content"], "Hello, world");
//! ```

mod types;

use std::sync::{Arc, OnceLock};

use serde_json::{Map, Value};
use tracing::debug;

pub use types::*;

use crate::alias::AliasMap;
use crate::catalog::TypeCatalog;
use crate::error::{Error, Result};
use crate::manager::{DecodeOptions, Decoder, Manager};

/// A registry with every vocabulary type registered.
#[must_use]
pub fn manager() -> Manager {
    Manager::with_catalog(TypeCatalog::global())
}

/// The `@context` written on documents that carry none of their own.
#[must_use]
pub fn default_context() -> Value {
    static CONTEXT: OnceLock<Value> = OnceLock::new();
    CONTEXT
        .get_or_init(|| {
            asld_vocab::serializer::jsonld::default_context(asld_vocab::Vocabulary::full())
        })
        .clone()
}

/// The discriminator strings of a document, in order.
pub(crate) fn type_strings(map: &Map<String, Value>) -> Result<Vec<&str>> {
    match map.get("type") {
        None => Err(Error::MalformedDocument(
            "document has no \"type\" property".to_string(),
        )),
        Some(Value::String(text)) => Ok(vec![text.as_str()]),
        Some(Value::Array(items)) => Ok(items.iter().filter_map(Value::as_str).collect()),
        Some(other) => Err(Error::MalformedDocument(format!(
            "\"type\" must be a string or an array, found {other}"
        ))),
    }
}

/// Decodes a JSON object into the node of its type.
///
/// `@context` is optional here; without one every vocabulary is read
/// unprefixed. With an array-valued `type`, the first known type wins.
///
/// # Errors
///
/// [`Error::MalformedDocument`] if `type` is missing or malformed,
/// [`Error::UnrecognizedType`] if no discriminator names a registered type,
/// or whatever decoding reports.
pub fn to_node(map: &Map<String, Value>, manager: &Manager, options: DecodeOptions) -> Result<Node> {
    let aliases = map
        .get("@context")
        .map(AliasMap::from_context)
        .unwrap_or_default();
    let decoder = Decoder::new(manager, Arc::new(aliases), options);
    let candidates = type_strings(map)?;
    for text in &candidates {
        let Some(class) = manager.catalog().lookup_type(text, decoder.aliases()) else {
            debug!(kind = *text, "skipping unknown type");
            continue;
        };
        if !manager.is_known(class.name) {
            continue;
        }
        let record = manager.deserialize(class.name, map, &decoder)?;
        return Node::try_from(record);
    }
    Err(Error::UnrecognizedType(candidates.join(", ")))
}

/// Parses JSON text and decodes it with [`to_node`].
///
/// # Errors
///
/// [`Error::Json`] for invalid JSON, [`Error::MalformedDocument`] if the
/// text is not an object, or whatever [`to_node`] reports.
pub fn from_str(text: &str, manager: &Manager, options: DecodeOptions) -> Result<Node> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => to_node(&map, manager, options),
        other => Err(Error::MalformedDocument(format!(
            "document must be a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

/// Writes a node as a complete document: `@context` first (the one it was
/// read with, or [`default_context`]), then its properties.
#[must_use]
pub fn serialize(node: &Node) -> Map<String, Value> {
    let body = node.record().serialize();
    let mut out = Map::with_capacity(body.len() + 1);
    out.insert("@context".to_string(), Value::Null);
    let mut context = None;
    for (key, value) in body {
        if key == "@context" {
            context = Some(value);
        } else {
            out.insert(key, value);
        }
    }
    if let Some(slot) = out.get_mut("@context") {
        *slot = context.unwrap_or_else(default_context);
    }
    out
}

/// Writes a node as pretty-printed JSON text.
///
/// # Errors
///
/// [`Error::Json`] if writing fails.
pub fn to_string_pretty(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Value::Object(serialize(node)))?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
