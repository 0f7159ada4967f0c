//! Vocabulary aliases declared by a document's `@context`.
//!
//! A document may refer to a vocabulary by a short alias (`"as:Note"`) or
//! unprefixed (`"Note"`). The [`AliasMap`] records, per vocabulary IRI, which
//! alias the document chose; the empty alias means unprefixed. Every
//! property key and type name the engine reads or writes is qualified
//! through it.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tracing::{debug, trace};

/// Mapping from vocabulary IRI to the alias a document uses for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: BTreeMap<String, String>,
}

impl AliasMap {
    /// An empty map: every vocabulary is unprefixed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the alias map described by an `@context` value.
    ///
    /// - a string names a vocabulary used unprefixed;
    /// - an array is processed element by element, in order;
    /// - an object maps aliases to vocabulary IRIs. Entries whose value is
    ///   not a string (expanded term definitions) are ignored, as are JSON-LD
    ///   keywords except `@vocab`, which declares an unprefixed vocabulary.
    ///
    /// Anything else yields an empty map. The first alias seen for a
    /// vocabulary wins.
    #[must_use]
    pub fn from_context(context: &Value) -> Self {
        let mut map = Self::new();
        map.merge_context(context);
        debug!(aliases = map.entries.len(), "read @context aliases");
        map
    }

    fn merge_context(&mut self, context: &Value) {
        match context {
            Value::String(iri) => self.insert(iri, ""),
            Value::Array(items) => items.iter().for_each(|item| self.merge_context(item)),
            Value::Object(entries) => {
                for (alias, iri) in entries {
                    let Value::String(iri) = iri else { continue };
                    match alias.as_str() {
                        "@vocab" => self.insert(iri, ""),
                        keyword if keyword.starts_with('@') => {}
                        alias => self.insert(iri, alias),
                    }
                }
            }
            _ => {}
        }
    }

    /// Records `alias` for the vocabulary at `iri`, under both its `http`
    /// and `https` spellings. Existing entries are kept.
    pub fn insert(&mut self, iri: &str, alias: &str) {
        for variant in scheme_variants(iri) {
            if self.entries.contains_key(&variant) {
                trace!(iri = %variant, alias, "alias already declared; keeping first");
                continue;
            }
            self.entries.insert(variant, alias.to_string());
        }
    }

    /// The alias declared for a vocabulary IRI, if any.
    #[must_use]
    pub fn get(&self, iri: &str) -> Option<&str> {
        self.entries.get(iri).map(String::as_str)
    }

    /// The alias to qualify terms of `namespace` with. Undeclared
    /// vocabularies, and the JSON-LD keyword pseudo-namespace, are
    /// unprefixed.
    #[must_use]
    pub fn alias_for(&self, namespace: &str) -> &str {
        if namespace.is_empty() {
            return "";
        }
        self.get(namespace).unwrap_or("")
    }

    /// The JSON key for a term: `alias:name`, or `name` when unprefixed.
    #[must_use]
    pub fn qualify(&self, namespace: &str, name: &str) -> String {
        match self.alias_for(namespace) {
            "" => name.to_string(),
            alias => format!("{alias}:{name}"),
        }
    }

    /// Number of vocabulary IRIs with a declared alias (counting both scheme
    /// spellings).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no alias is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(iri, alias)` pairs in IRI order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The map described by the default `@context` new documents carry.
    #[must_use]
    pub fn default_context() -> Arc<AliasMap> {
        static DEFAULT: OnceLock<Arc<AliasMap>> = OnceLock::new();
        DEFAULT
            .get_or_init(|| {
                let context = asld_vocab::serializer::jsonld::default_context(
                    asld_vocab::Vocabulary::full(),
                );
                Arc::new(AliasMap::from_context(&context))
            })
            .clone()
    }
}

fn scheme_variants(iri: &str) -> Vec<String> {
    if let Some(rest) = iri.strip_prefix("https://") {
        vec![iri.to_string(), format!("http://{rest}")]
    } else if let Some(rest) = iri.strip_prefix("http://") {
        vec![iri.to_string(), format!("https://{rest}")]
    } else {
        vec![iri.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const AS: &str = "https://www.w3.org/ns/activitystreams";

    #[test]
    fn string_context_is_unprefixed() {
        let map = AliasMap::from_context(&json!(AS));
        assert_eq!(map.get(AS), Some(""));
        assert_eq!(map.get("http://www.w3.org/ns/activitystreams"), Some(""));
        assert_eq!(map.qualify(AS, "Note"), "Note");
    }

    #[test]
    fn object_context_declares_aliases() {
        let map = AliasMap::from_context(&json!({ "as": AS }));
        assert_eq!(map.alias_for(AS), "as");
        assert_eq!(map.alias_for("http://www.w3.org/ns/activitystreams"), "as");
        assert_eq!(map.qualify(AS, "content"), "as:content");
    }

    #[test]
    fn array_context_merges_in_order() {
        let map = AliasMap::from_context(&json!([
            AS,
            { "toot": "http://joinmastodon.org/ns#", "sensitive": "as:sensitive" },
        ]));
        assert_eq!(map.alias_for(AS), "");
        assert_eq!(map.alias_for("http://joinmastodon.org/ns#"), "toot");
        assert_eq!(map.alias_for("https://joinmastodon.org/ns#"), "toot");
        assert_eq!(map.get("as:sensitive"), Some("sensitive"));
    }

    #[test]
    fn first_alias_wins() {
        let map = AliasMap::from_context(&json!([{ "as": AS }, { "other": AS }, AS]));
        assert_eq!(map.alias_for(AS), "as");
    }

    #[test]
    fn expanded_terms_and_keywords_are_skipped() {
        let map = AliasMap::from_context(&json!({
            "@vocab": AS,
            "@language": "en",
            "manuallyApprovesFollowers": { "@id": "as:manuallyApprovesFollowers", "@type": "@id" },
        }));
        assert_eq!(map.get(AS), Some(""));
        assert_eq!(map.get("en"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn other_json_kinds_yield_empty_map() {
        assert!(AliasMap::from_context(&json!(42)).is_empty());
        assert!(AliasMap::from_context(&Value::Null).is_empty());
    }

    #[test]
    fn keywords_are_never_prefixed() {
        let map = AliasMap::from_context(&json!({ "as": AS, "x": "" }));
        assert_eq!(map.qualify("", "id"), "id");
    }

    #[test]
    fn default_context_prefixes_toot_only() {
        let map = AliasMap::default_context();
        assert_eq!(map.alias_for(AS), "");
        assert_eq!(map.alias_for("http://joinmastodon.org/ns#"), "toot");
    }
}
