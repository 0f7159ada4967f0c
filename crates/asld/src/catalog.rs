//! Precomputed type relations and per-type property tables.
//!
//! The vocabulary states its relations as complete lists; the catalog turns
//! them into hash sets once, so every relation query is a single lookup.
//! Built lazily on first use and immutable afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use asld_vocab::model::iris;
use asld_vocab::{Class, Property, Vocabulary};
use tracing::{debug, warn};

use crate::alias::AliasMap;
use crate::literal::Datatype;

/// One alternative a property value may take, besides an IRI reference or
/// an unknown value.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// A nested value of this type (or, through range expansion, one of its
    /// descendants).
    Type(&'static Class),
    /// A lexical value.
    Literal(Datatype),
    /// A natural-language map.
    Language,
}

impl Kind {
    /// Display name: the type name, the datatype name, or
    /// `rdf:langString`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Type(class) => class.name,
            Kind::Literal(datatype) => datatype.name(),
            Kind::Language => "rdf:langString",
        }
    }
}

/// A property together with the kinds its values may take.
#[derive(Debug)]
pub struct PropertyEntry {
    property: &'static Property,
    kinds: Vec<Kind>,
}

impl PropertyEntry {
    fn new(vocab: &'static Vocabulary, property: &'static Property) -> Self {
        let mut kinds: Vec<Kind> = Vec::new();
        let mut seen_types: HashSet<&str> = HashSet::new();
        for &range in property.range {
            if range == iris::RDF_LANG_STRING {
                kinds.push(Kind::Language);
            } else if let Some(datatype) = Datatype::from_iri(range) {
                kinds.push(Kind::Literal(datatype));
            } else if let Some(class) = vocab.find_class(range) {
                // A type in a range admits every descendant, nearest first.
                let expanded = std::iter::once(class)
                    .chain(class.extended_by.iter().filter_map(|name| vocab.find_class(name)));
                for class in expanded {
                    if seen_types.insert(class.name) {
                        kinds.push(Kind::Type(class));
                    }
                }
            } else {
                warn!(property = property.name, range, "range names no type or datatype");
            }
        }
        Self { property, kinds }
    }

    /// The vocabulary property.
    #[must_use]
    pub fn property(&self) -> &'static Property {
        self.property
    }

    /// Local name, as used in JSON keys.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.property.name
    }

    /// Declared kinds in declaration order. A kind's position is its kind
    /// index.
    #[must_use]
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    /// Kind index of the nested type `name`.
    #[must_use]
    pub fn type_index(&self, name: &str) -> Option<usize> {
        self.kinds
            .iter()
            .position(|k| matches!(k, Kind::Type(class) if class.name == name))
    }

    /// Kind index of `datatype`.
    #[must_use]
    pub fn literal_index(&self, datatype: Datatype) -> Option<usize> {
        self.kinds
            .iter()
            .position(|k| matches!(k, Kind::Literal(d) if *d == datatype))
    }

    /// Kind index of the natural-language map kind.
    #[must_use]
    pub fn language_index(&self) -> Option<usize> {
        self.kinds.iter().position(|k| matches!(k, Kind::Language))
    }
}

/// Relations and declared properties of one type.
#[derive(Debug)]
pub struct CatalogEntry {
    class: &'static Class,
    extends: HashSet<&'static str>,
    disjoint_with: HashSet<&'static str>,
    extended_by: HashSet<&'static str>,
    properties: Vec<&'static PropertyEntry>,
    positions: HashMap<&'static str, usize>,
}

impl CatalogEntry {
    /// The vocabulary class.
    #[must_use]
    pub fn class(&self) -> &'static Class {
        self.class
    }

    /// Every property the type declares, own and inherited, in vocabulary
    /// declaration order.
    #[must_use]
    pub fn properties(&self) -> &[&'static PropertyEntry] {
        &self.properties
    }

    /// Position of the property named `name` in [`properties`](Self::properties).
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// The declared property named `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static PropertyEntry> {
        self.position(name).map(|i| self.properties[i])
    }

    /// True if the type declares every property `other` declares.
    #[must_use]
    pub fn satisfies(&self, other: &CatalogEntry) -> bool {
        other.properties.iter().all(|p| {
            self.property(p.name())
                .is_some_and(|own| own.property.id == p.property.id)
        })
    }
}

/// The closed set of known types and their relations.
#[derive(Debug)]
pub struct TypeCatalog {
    vocabulary: &'static Vocabulary,
    classes: Vec<&'static Class>,
    entries: HashMap<&'static str, CatalogEntry>,
    by_iri: HashMap<&'static str, &'static Class>,
    properties: &'static [PropertyEntry],
}

impl TypeCatalog {
    /// The process-wide catalog over [`Vocabulary::full`].
    #[must_use]
    pub fn global() -> &'static TypeCatalog {
        static CATALOG: OnceLock<TypeCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| TypeCatalog::build(Vocabulary::full(), property_table()))
    }

    fn build(vocabulary: &'static Vocabulary, properties: &'static [PropertyEntry]) -> Self {
        let classes: Vec<&'static Class> = vocabulary.classes().collect();
        let mut entries = HashMap::with_capacity(classes.len());
        let mut by_iri = HashMap::with_capacity(classes.len());
        for &class in &classes {
            let declared: Vec<&'static PropertyEntry> = properties
                .iter()
                .filter(|p| {
                    p.property
                        .domain
                        .iter()
                        .any(|d| *d == class.name || class.extends.contains(d))
                })
                .collect();
            let positions = declared
                .iter()
                .enumerate()
                .map(|(i, p)| (p.name(), i))
                .collect();
            entries.insert(
                class.name,
                CatalogEntry {
                    class,
                    extends: class.extends.iter().copied().collect(),
                    disjoint_with: class.disjoint_with.iter().copied().collect(),
                    extended_by: class.extended_by.iter().copied().collect(),
                    properties: declared,
                    positions,
                },
            );
            by_iri.insert(class.id, class);
        }
        debug!(
            types = classes.len(),
            properties = properties.len(),
            "built type catalog"
        );
        Self {
            vocabulary,
            classes,
            entries,
            by_iri,
            properties,
        }
    }

    /// The vocabulary the catalog was built from.
    #[must_use]
    pub fn vocabulary(&self) -> &'static Vocabulary {
        self.vocabulary
    }

    /// Every known type, in vocabulary order.
    pub fn classes(&self) -> impl Iterator<Item = &'static Class> + '_ {
        self.classes.iter().copied()
    }

    /// The type named `name`.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&'static Class> {
        self.entries.get(name).map(|e| e.class)
    }

    /// True if `name` is a known type.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Relations and properties of the type named `name`.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Every property in the vocabulary.
    #[must_use]
    pub fn properties(&self) -> &'static [PropertyEntry] {
        self.properties
    }

    /// The property `name` of `namespace`.
    #[must_use]
    pub fn property(&self, namespace: &str, name: &str) -> Option<&'static PropertyEntry> {
        self.properties
            .iter()
            .find(|p| p.property.namespace == namespace && p.property.name == name)
    }

    /// True if `name` has `other` among its ancestors.
    #[must_use]
    pub fn is_extending(&self, name: &str, other: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|e| e.extends.contains(other))
    }

    /// True if `other` has `name` among its ancestors.
    #[must_use]
    pub fn is_extended_by(&self, name: &str, other: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|e| e.extended_by.contains(other))
    }

    /// True if no value can be both `name` and `other`.
    #[must_use]
    pub fn is_disjoint_with(&self, name: &str, other: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|e| e.disjoint_with.contains(other))
    }

    /// True if `name` declares every property `capability` declares.
    #[must_use]
    pub fn satisfies(&self, name: &str, capability: &str) -> bool {
        match (self.entries.get(name), self.entries.get(capability)) {
            (Some(entry), Some(required)) => entry.satisfies(required),
            _ => false,
        }
    }

    /// Resolves a document's type string: a full type IRI, `alias:Name`
    /// under the document's aliases, or a bare `Name`.
    #[must_use]
    pub fn lookup_type(&self, type_string: &str, aliases: &AliasMap) -> Option<&'static Class> {
        if let Some(class) = self.by_iri.get(type_string) {
            return Some(class);
        }
        let (prefix, local) = type_string.split_once(':').unwrap_or(("", type_string));
        let class = self.class(local)?;
        (prefix.is_empty() || aliases.alias_for(class.namespace) == prefix).then_some(class)
    }
}

fn property_table() -> &'static [PropertyEntry] {
    static PROPERTIES: OnceLock<Vec<PropertyEntry>> = OnceLock::new();
    PROPERTIES.get_or_init(|| {
        let vocab = Vocabulary::full();
        vocab
            .properties()
            .map(|p| PropertyEntry::new(vocab, p))
            .collect()
    })
}
