//! Dispatch of raw JSON documents.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{check_callbacks, Callback};
use crate::alias::AliasMap;
use crate::error::{Error, Result};
use crate::manager::{DecodeOptions, Decoder, Manager};
use crate::streams::Node;

/// Decodes a JSON object and hands it to the first callback whose
/// signature names its type.
///
/// Unlike [`streams::to_node`], the document must carry an `@context`.
/// With an array-valued `type`, each type is tried in order until one is
/// handled.
#[derive(Debug)]
pub struct DocumentResolver<C, R> {
    manager: Arc<Manager>,
    callbacks: Vec<Callback<C, R>>,
    options: DecodeOptions,
}

impl<C, R> DocumentResolver<C, R> {
    /// Builds the resolver over `manager`, decoding leniently.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if any callback names an unknown type.
    pub fn new(manager: Arc<Manager>, callbacks: Vec<Callback<C, R>>) -> Result<Self> {
        check_callbacks(&callbacks)?;
        Ok(Self {
            manager,
            callbacks,
            options: DecodeOptions::default(),
        })
    }

    /// Sets the decoding policy.
    #[must_use]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// The registry documents are decoded through.
    #[must_use]
    pub fn manager(&self) -> &Arc<Manager> {
        &self.manager
    }

    /// Decodes `document` and dispatches it.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedDocument`] if `type` or `@context` is missing;
    /// - [`Error::UnhandledType`] if no discriminator names a registered
    ///   type;
    /// - [`Error::NoCallbackMatch`] if the type is known but no callback
    ///   accepts it;
    /// - otherwise whatever decoding or the callback reports.
    pub fn resolve(&self, ctx: &mut C, document: &Map<String, Value>) -> Result<R> {
        if !document.contains_key("type") {
            return Err(Error::MalformedDocument(
                "document has no \"type\" property".to_string(),
            ));
        }
        let Some(context) = document.get("@context") else {
            return Err(Error::MalformedDocument(
                "document has no \"@context\" property".to_string(),
            ));
        };
        let decoder = Decoder::new(
            &self.manager,
            Arc::new(AliasMap::from_context(context)),
            self.options,
        );
        let candidates = match document.get("type") {
            Some(Value::String(text)) => vec![text.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };
        for text in &candidates {
            match self.dispatch(ctx, text, document, &decoder) {
                Err(Error::UnhandledType(_)) => trace!(kind = *text, "type unhandled; trying next"),
                other => return other,
            }
        }
        debug!(types = ?candidates, "no handled type");
        Err(Error::UnhandledType(candidates.join(", ")))
    }

    fn dispatch(
        &self,
        ctx: &mut C,
        type_string: &str,
        document: &Map<String, Value>,
        decoder: &Decoder<'_>,
    ) -> Result<R> {
        let class = self
            .manager
            .catalog()
            .lookup_type(type_string, decoder.aliases())
            .filter(|class| self.manager.is_known(class.name))
            .ok_or_else(|| Error::UnhandledType(type_string.to_string()))?;
        let record = self.manager.deserialize(class.name, document, decoder)?;
        let node = Node::try_from(record)?;
        match self.callbacks.iter().find(|cb| cb.parameter() == class.name) {
            Some(callback) => callback.call(ctx, node),
            None => Err(Error::NoCallbackMatch(class.name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::{Create, Note};
    use serde_json::json;

    const AS: &str = "https://www.w3.org/ns/activitystreams";

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn resolver() -> DocumentResolver<Vec<String>, ()> {
        DocumentResolver::new(
            Arc::new(streams::manager()),
            vec![
                Callback::on::<Note, _>(|log: &mut Vec<String>, note: Note| {
                    let id = note.id().map(ToString::to_string).unwrap_or_default();
                    log.push(format!("note {id}"));
                }),
                Callback::on::<Create, _>(|log: &mut Vec<String>, _| log.push("create".into())),
            ],
        )
        .unwrap()
    }

    #[test]
    fn dispatches_decoded_documents() {
        let mut log = Vec::new();
        let doc = object(json!({ "@context": AS, "type": "Note", "id": "https://example.com/n/1" }));
        resolver().resolve(&mut log, &doc).unwrap();
        assert_eq!(log, ["note https://example.com/n/1"]);
    }

    #[test]
    fn requires_type_and_context() {
        let mut log = Vec::new();
        let no_context = object(json!({ "type": "Note" }));
        assert!(matches!(
            resolver().resolve(&mut log, &no_context),
            Err(Error::MalformedDocument(_))
        ));
        let no_type = object(json!({ "@context": AS }));
        assert!(matches!(
            resolver().resolve(&mut log, &no_type),
            Err(Error::MalformedDocument(_))
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn unknown_types_are_unhandled() {
        let doc = object(json!({ "@context": AS, "type": "Banana" }));
        let err = resolver().resolve(&mut Vec::new(), &doc).unwrap_err();
        assert!(matches!(err, Error::UnhandledType(_)));
        assert!(err.is_unmatched());
    }

    #[test]
    fn known_types_without_callbacks_do_not_match() {
        let doc = object(json!({ "@context": AS, "type": "Article" }));
        let err = resolver().resolve(&mut Vec::new(), &doc).unwrap_err();
        assert!(matches!(err, Error::NoCallbackMatch(ref name) if name == "Article"));
    }

    #[test]
    fn array_types_skip_unhandled_entries() {
        let mut log = Vec::new();
        let doc = object(json!({ "@context": AS, "type": ["Banana", "Create"] }));
        resolver().resolve(&mut log, &doc).unwrap();
        assert_eq!(log, ["create"]);
    }

    #[test]
    fn construction_rejects_unknown_signatures() {
        let built: Result<DocumentResolver<(), ()>> = DocumentResolver::new(
            Arc::new(streams::manager()),
            vec![Callback::named("Banana", |_, _| ())],
        );
        assert!(matches!(built, Err(Error::Construction(_))));
    }
}
