//! Documents of one known type.
//!
//! A [`TypeRecord`] holds one slot per property its type declares (own and
//! inherited), in vocabulary declaration order, plus an unknown bag of every
//! key the type does not declare. The bag is what makes a decode followed
//! by an encode lossless for extensions the vocabulary has never heard of.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use asld_vocab::Class;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::alias::AliasMap;
use crate::catalog::{CatalogEntry, PropertyEntry, TypeCatalog};
use crate::error::{Error, Result};
use crate::iri::Iri;
use crate::list::PropertyList;
use crate::manager::Decoder;
use crate::value::PropertyValue;

/// The value(s) of one declared property.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// At most one value.
    Functional(PropertyValue),
    /// Any number of values.
    NonFunctional(PropertyList),
}

impl Slot {
    fn empty(entry: &'static PropertyEntry) -> Self {
        if entry.property().functional {
            Slot::Functional(PropertyValue::new(entry))
        } else {
            Slot::NonFunctional(PropertyList::new(entry))
        }
    }

    /// True if the slot holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Slot::Functional(value) => value.is_empty(),
            Slot::NonFunctional(list) => list.iter().all(PropertyValue::is_empty),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Slot::Functional(a), Slot::Functional(b)) => a.compare(b),
            (Slot::NonFunctional(a), Slot::NonFunctional(b)) => a.compare(b),
            (Slot::Functional(_), Slot::NonFunctional(_)) => Ordering::Less,
            (Slot::NonFunctional(_), Slot::Functional(_)) => Ordering::Greater,
        }
    }

    /// `(plain, maps)` JSON, as written under the property's key and its
    /// `<name>Map` key.
    fn serialize(&self) -> (Option<Value>, Option<Value>) {
        match self {
            Slot::Functional(value) if value.is_map_keyed() => (None, value.serialize()),
            Slot::Functional(value) => (value.serialize(), None),
            Slot::NonFunctional(list) => list.serialize(),
        }
    }
}

/// A document of one known type.
#[derive(Clone)]
pub struct TypeRecord {
    entry: &'static CatalogEntry,
    aliases: Arc<AliasMap>,
    slots: Vec<Option<Slot>>,
    unknown: Map<String, Value>,
}

impl TypeRecord {
    /// An empty document of type `name`, qualified under the default
    /// `@context`.
    ///
    /// # Errors
    ///
    /// [`Error::UnrecognizedType`] if `name` is not a known type.
    pub fn new(name: &str) -> Result<Self> {
        TypeCatalog::global()
            .entry(name)
            .map(Self::from_entry)
            .ok_or_else(|| Error::UnrecognizedType(name.to_string()))
    }

    /// An empty document of the entry's type.
    #[must_use]
    pub fn from_entry(entry: &'static CatalogEntry) -> Self {
        Self {
            entry,
            aliases: AliasMap::default_context(),
            slots: vec![None; entry.properties().len()],
            unknown: Map::new(),
        }
    }

    /// The type.
    #[must_use]
    pub fn class(&self) -> &'static Class {
        self.entry.class()
    }

    /// The type's local name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.entry.class().name
    }

    /// The catalog entry for the type.
    #[must_use]
    pub fn entry(&self) -> &'static CatalogEntry {
        self.entry
    }

    /// The aliases keys and type names are qualified with.
    #[must_use]
    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Replaces the aliases keys and type names are qualified with.
    pub fn set_aliases(&mut self, aliases: Arc<AliasMap>) {
        self.aliases = aliases;
    }

    /// True if the type declares a property named `name`.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.entry.position(name).is_some()
    }

    /// The slot of property `name`, if it has been set.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.entry
            .position(name)
            .and_then(|i| self.slots[i].as_ref())
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Slot> {
        let position = self
            .entry
            .position(name)
            .ok_or_else(|| Error::PropertyNotDeclared {
                class: self.type_name(),
                property: name.to_string(),
            })?;
        let entry = self.entry.properties()[position];
        Ok(self.slots[position].get_or_insert_with(|| Slot::empty(entry)))
    }

    /// The value of functional property `name`, if set.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&PropertyValue> {
        match self.slot(name)? {
            Slot::Functional(value) => Some(value),
            Slot::NonFunctional(_) => None,
        }
    }

    /// Mutable access to functional property `name`, creating it empty if
    /// unset.
    ///
    /// # Errors
    ///
    /// [`Error::PropertyNotDeclared`] if the type has no such property, or
    /// [`Error::Arity`] if it is non-functional.
    pub fn value_mut(&mut self, name: &str) -> Result<&mut PropertyValue> {
        match self.slot_mut(name)? {
            Slot::Functional(value) => Ok(value),
            Slot::NonFunctional(list) => Err(Error::Arity {
                property: list.name(),
                arity: "non-functional",
            }),
        }
    }

    /// The values of non-functional property `name`, if set.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&PropertyList> {
        match self.slot(name)? {
            Slot::NonFunctional(list) => Some(list),
            Slot::Functional(_) => None,
        }
    }

    /// Mutable access to non-functional property `name`, creating it empty
    /// if unset.
    ///
    /// # Errors
    ///
    /// [`Error::PropertyNotDeclared`] if the type has no such property, or
    /// [`Error::Arity`] if it is functional.
    pub fn list_mut(&mut self, name: &str) -> Result<&mut PropertyList> {
        match self.slot_mut(name)? {
            Slot::NonFunctional(list) => Ok(list),
            Slot::Functional(value) => Err(Error::Arity {
                property: value.name(),
                arity: "functional",
            }),
        }
    }

    /// Unsets property `name`, returning its slot.
    pub fn remove(&mut self, name: &str) -> Option<Slot> {
        let position = self.entry.position(name)?;
        self.slots[position].take()
    }

    /// Every set, non-empty property, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static PropertyEntry, &Slot)> + '_ {
        self.entry
            .properties()
            .iter()
            .zip(&self.slots)
            .filter_map(|(entry, slot)| {
                slot.as_ref()
                    .filter(|s| !s.is_empty())
                    .map(|s| (*entry, s))
            })
    }

    /// The document's `id`, if it is an IRI.
    #[must_use]
    pub fn id(&self) -> Option<&Iri> {
        self.value("id").and_then(PropertyValue::iri)
    }

    /// Sets the document's `id`.
    ///
    /// # Errors
    ///
    /// [`Error::PropertyNotDeclared`] only if the vocabulary lost its `id`
    /// keyword.
    pub fn set_id(&mut self, id: Iri) -> Result<()> {
        self.value_mut("id")?.set_iri(id);
        Ok(())
    }

    /// Keys the type does not declare, kept verbatim.
    #[must_use]
    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    /// Mutable access to the unknown bag.
    pub fn unknown_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.unknown
    }

    /// True if this type has `other` among its ancestors.
    #[must_use]
    pub fn is_extending(&self, other: &str) -> bool {
        TypeCatalog::global().is_extending(self.type_name(), other)
    }

    /// True if `other` has this type among its ancestors.
    #[must_use]
    pub fn is_extended_by(&self, other: &str) -> bool {
        TypeCatalog::global().is_extended_by(self.type_name(), other)
    }

    /// True if no value can be both this type and `other`.
    #[must_use]
    pub fn is_disjoint_with(&self, other: &str) -> bool {
        TypeCatalog::global().is_disjoint_with(self.type_name(), other)
    }

    /// Reads `map` as a document of the entry's type.
    ///
    /// The `type` key must name the type (as a string or within an array),
    /// under the decoder's aliases. Declared properties are read from their
    /// qualified keys; every other key, `@context` included, goes to the
    /// unknown bag.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedDocument`] if `type` is missing or not a string or
    /// array, [`Error::TypeMismatch`] if it names another type, or whatever
    /// a property value reports.
    pub fn deserialize(
        entry: &'static CatalogEntry,
        map: &Map<String, Value>,
        decoder: &Decoder<'_>,
    ) -> Result<Self> {
        let class = entry.class();
        check_type(class, map, decoder)?;

        let aliases = decoder.aliases();
        let mut record = Self {
            entry,
            aliases: Arc::clone(aliases),
            slots: vec![None; entry.properties().len()],
            unknown: Map::new(),
        };
        let mut consumed: Vec<String> = Vec::new();

        for (position, property) in entry.properties().iter().enumerate() {
            let key = aliases.qualify(property.property().namespace, property.name());
            let map_key = property
                .property()
                .map_name()
                .map(|m| aliases.qualify(property.property().namespace, &m));
            let raw = map.get(&key);
            let raw_maps = map_key.as_ref().and_then(|k| map.get(k));

            let slot = if property.property().functional {
                if let Some(raw) = raw {
                    consumed.push(key);
                    Some(Slot::Functional(PropertyValue::decode(property, raw, decoder)?))
                } else if let (Some(raw_maps), Some(map_key)) = (raw_maps, map_key) {
                    consumed.push(map_key);
                    Some(Slot::Functional(PropertyValue::decode_language(
                        property, raw_maps, decoder,
                    )?))
                } else {
                    None
                }
            } else if raw.is_some() || raw_maps.is_some() {
                let list = PropertyList::decode(property, raw, raw_maps, decoder)?;
                consumed.push(key);
                consumed.extend(map_key);
                Some(Slot::NonFunctional(list))
            } else {
                None
            };
            record.slots[position] = slot;
        }

        for (key, value) in map {
            if !consumed.iter().any(|c| c == key) {
                trace!(kind = class.name, key = key.as_str(), "kept undeclared key");
                record.unknown.insert(key.clone(), value.clone());
            }
        }
        Ok(record)
    }

    /// Writes the document: `type` first, then every set property in
    /// declaration order, then each unknown entry whose key is not already
    /// present.
    #[must_use]
    pub fn serialize(&self) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert(
            "type".to_string(),
            Value::String(self.aliases.qualify(self.class().namespace, self.type_name())),
        );
        for (property, slot) in self.properties() {
            let namespace = property.property().namespace;
            let (plain, maps) = slot.serialize();
            if let Some(plain) = plain {
                out.insert(self.aliases.qualify(namespace, property.name()), plain);
            }
            if let (Some(maps), Some(map_name)) = (maps, property.property().map_name()) {
                out.insert(self.aliases.qualify(namespace, &map_name), maps);
            }
        }
        for (key, value) in &self.unknown {
            if out.contains_key(key) {
                debug!(key = key.as_str(), "unknown key collides with a property; dropped");
                continue;
            }
            out.insert(key.clone(), value.clone());
        }
        out
    }

    /// Total order: type name, then each declared property in declaration
    /// order (unset before set), then the number of unknown entries.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.type_name() != other.type_name() {
            return self.type_name().cmp(other.type_name());
        }
        for (a, b) in self.slots.iter().zip(&other.slots) {
            let a = a.as_ref().filter(|s| !s.is_empty());
            let b = b.as_ref().filter(|s| !s.is_empty());
            let order = match (a, b) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.compare(b),
            };
            if order != Ordering::Equal {
                return order;
            }
        }
        self.unknown.len().cmp(&other.unknown.len())
    }

    /// Strict order under [`compare`](Self::compare).
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl PartialEq for TypeRecord {
    /// Structural equality over type, properties and unknown entries. An
    /// empty property equals an unset one; the aliases used to write the
    /// document are not compared.
    fn eq(&self, other: &Self) -> bool {
        fn set(slot: &Option<Slot>) -> Option<&Slot> {
            slot.as_ref().filter(|s| !s.is_empty())
        }
        std::ptr::eq(self.entry, other.entry)
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|(a, b)| set(a) == set(b))
            && self.unknown == other.unknown
    }
}

impl fmt::Debug for TypeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("TypeRecord");
        out.field("type", &self.type_name());
        for (property, slot) in self.properties() {
            out.field(property.name(), slot);
        }
        out.field("unknown", &self.unknown).finish()
    }
}

fn check_type(class: &'static Class, map: &Map<String, Value>, decoder: &Decoder<'_>) -> Result<()> {
    let catalog = decoder.manager().catalog();
    let names = |text: &str| {
        catalog
            .lookup_type(text, decoder.aliases())
            .is_some_and(|found| found.name == class.name)
    };
    let matched = match map.get("type") {
        None => {
            return Err(Error::MalformedDocument(
                "document has no \"type\" property".to_string(),
            ))
        }
        Some(Value::String(text)) => names(text),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).any(names),
        Some(other) => {
            return Err(Error::MalformedDocument(format!(
                "\"type\" must be a string or an array, found {other}"
            )))
        }
    };
    if matched {
        Ok(())
    } else {
        Err(Error::TypeMismatch {
            expected: class.name,
            found: map.get("type").map(ToString::to_string).unwrap_or_default(),
        })
    }
}
