//! Deserializer registry.
//!
//! Property values never call a type's deserializer directly: when a value
//! may be a nested document, the decoder asks the [`Manager`] for the
//! deserializer registered under each candidate type name. The manager is
//! passed explicitly, so an application can run several registries side by
//! side or swap one out in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::trace;

use crate::alias::AliasMap;
use crate::catalog::{CatalogEntry, TypeCatalog};
use crate::error::{Error, Result};
use crate::record::TypeRecord;

/// Reads a document of the entry's type.
pub type DeserializeFn =
    fn(&'static CatalogEntry, &Map<String, Value>, &Decoder<'_>) -> Result<TypeRecord>;

/// How a type is deserialized.
#[derive(Clone, Copy)]
pub struct Registration {
    entry: &'static CatalogEntry,
    deserialize: DeserializeFn,
}

impl Registration {
    /// Pairs a catalog entry with its deserializer.
    #[must_use]
    pub fn new(entry: &'static CatalogEntry, deserialize: DeserializeFn) -> Self {
        Self { entry, deserialize }
    }

    /// The registered type.
    #[must_use]
    pub fn entry(&self) -> &'static CatalogEntry {
        self.entry
    }

    /// Runs the deserializer.
    ///
    /// # Errors
    ///
    /// Whatever the deserializer reports.
    pub fn deserialize(&self, map: &Map<String, Value>, decoder: &Decoder<'_>) -> Result<TypeRecord> {
        (self.deserialize)(self.entry, map, decoder)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("type", &self.entry.class().name)
            .finish_non_exhaustive()
    }
}

/// Type name to deserializer registry.
#[derive(Clone)]
pub struct Manager {
    catalog: &'static TypeCatalog,
    registrations: HashMap<&'static str, Registration>,
}

impl Manager {
    /// An empty registry over `catalog`.
    #[must_use]
    pub fn new(catalog: &'static TypeCatalog) -> Self {
        Self {
            catalog,
            registrations: HashMap::new(),
        }
    }

    /// A registry with the generic record deserializer registered for every
    /// type in `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: &'static TypeCatalog) -> Self {
        let mut manager = Self::new(catalog);
        for class in catalog.classes() {
            if let Some(entry) = catalog.entry(class.name) {
                manager.register(Registration::new(entry, TypeRecord::deserialize));
            }
        }
        manager
    }

    /// The catalog types are looked up in.
    #[must_use]
    pub fn catalog(&self) -> &'static TypeCatalog {
        self.catalog
    }

    /// Registers a deserializer, returning the one it replaced.
    pub fn register(&mut self, registration: Registration) -> Option<Registration> {
        let name = registration.entry.class().name;
        trace!(name, "registering deserializer");
        self.registrations.insert(name, registration)
    }

    /// The registration for type `name`.
    #[must_use]
    pub fn registration(&self, name: &str) -> Option<&Registration> {
        self.registrations.get(name)
    }

    /// The deserializer registered for type `name`.
    #[must_use]
    pub fn deserializer(&self, name: &str) -> Option<DeserializeFn> {
        self.registrations.get(name).map(|r| r.deserialize)
    }

    /// True if a deserializer is registered for `name`.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.registrations.contains_key(name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Deserializes `map` as type `name`.
    ///
    /// # Errors
    ///
    /// [`Error::UnrecognizedType`] if nothing is registered under `name`;
    /// otherwise whatever the deserializer reports.
    pub fn deserialize(
        &self,
        name: &str,
        map: &Map<String, Value>,
        decoder: &Decoder<'_>,
    ) -> Result<TypeRecord> {
        self.registrations
            .get(name)
            .ok_or_else(|| Error::UnrecognizedType(name.to_string()))?
            .deserialize(map, decoder)
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.registrations.keys().collect();
        names.sort_unstable();
        f.debug_struct("Manager").field("registered", &names).finish()
    }
}

/// Decoding policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject values that match none of their property's kinds instead of
    /// keeping them as unknown values.
    pub strict: bool,
}

impl DecodeOptions {
    /// Lenient decoding: unmatched values are kept verbatim.
    #[must_use]
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Strict decoding: unmatched values are [`Error::MalformedDocument`].
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Everything one decode needs: the registry, the document's aliases and
/// the policy.
#[derive(Debug, Clone)]
pub struct Decoder<'m> {
    manager: &'m Manager,
    aliases: Arc<AliasMap>,
    options: DecodeOptions,
}

impl<'m> Decoder<'m> {
    /// Bundles a decode.
    #[must_use]
    pub fn new(manager: &'m Manager, aliases: Arc<AliasMap>, options: DecodeOptions) -> Self {
        Self {
            manager,
            aliases,
            options,
        }
    }

    /// The registry nested values are deserialized through.
    #[must_use]
    pub fn manager(&self) -> &'m Manager {
        self.manager
    }

    /// The document's aliases.
    #[must_use]
    pub fn aliases(&self) -> &Arc<AliasMap> {
        &self.aliases
    }

    /// The decoding policy.
    #[must_use]
    pub fn options(&self) -> DecodeOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_catalog_registers_every_type() {
        let catalog = TypeCatalog::global();
        let manager = Manager::with_catalog(catalog);
        assert_eq!(manager.len(), catalog.classes().count());
        assert!(manager.is_known("Note"));
        assert!(manager.is_known("Emoji"));
        assert!(!manager.is_known("Banana"));
    }

    #[test]
    fn unregistered_types_are_unrecognized() {
        let manager = Manager::new(TypeCatalog::global());
        let decoder = Decoder::new(&manager, Arc::new(AliasMap::new()), DecodeOptions::lenient());
        let Value::Object(map) = json!({ "type": "Note" }) else {
            unreachable!()
        };
        let err = manager.deserialize("Note", &map, &decoder).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedType(name) if name == "Note"));
    }

    fn always_empty_note(
        entry: &'static CatalogEntry,
        _map: &Map<String, Value>,
        _decoder: &Decoder<'_>,
    ) -> Result<TypeRecord> {
        Ok(TypeRecord::from_entry(entry))
    }

    #[test]
    fn registrations_can_be_replaced() {
        let catalog = TypeCatalog::global();
        let mut manager = Manager::with_catalog(catalog);
        let note = catalog.entry("Note").unwrap();
        let previous = manager.register(Registration::new(note, always_empty_note));
        assert!(previous.is_some());

        let decoder = Decoder::new(&manager, Arc::new(AliasMap::new()), DecodeOptions::strict());
        let Value::Object(map) = json!({ "type": "Note", "content": "ignored" }) else {
            unreachable!()
        };
        let record = manager.deserialize("Note", &map, &decoder).unwrap();
        assert!(record.list("content").map_or(true, |l| l.is_empty()));
    }
}
