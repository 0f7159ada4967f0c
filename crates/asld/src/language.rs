//! Natural-language maps (`contentMap`, `nameMap`, ...).

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Text keyed by BCP 47 language tag.
///
/// Keys are kept sorted, so two maps with the same entries compare equal
/// regardless of the order they were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LanguageMap {
    entries: BTreeMap<String, String>,
}

impl LanguageMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON object whose values are all strings. Any other shape
    /// returns `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Object(object) = value else {
            return None;
        };
        object
            .iter()
            .map(|(tag, text)| Some((tag.clone(), text.as_str()?.to_string())))
            .collect::<Option<BTreeMap<_, _>>>()
            .map(|entries| Self { entries })
    }

    /// Writes the map as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .entries
            .iter()
            .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
            .collect();
        Value::Object(object)
    }

    /// The text for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    /// True if the map has text for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Sets the text for `tag`, returning the text it replaced.
    pub fn insert(&mut self, tag: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(tag.into(), text.into())
    }

    /// Removes the text for `tag`.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.entries.remove(tag)
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no language has text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(tag, text)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<T: Into<String>, U: Into<String>> FromIterator<(T, U)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (T, U)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
