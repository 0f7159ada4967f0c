//! Core vocabulary model types.
//!
//! These types describe a JSON-LD vocabulary as typed Rust data. Every
//! cross-reference (parent classes, disjoint classes, property domains and
//! ranges) is a plain `&'static str` naming a class or a datatype IRI; the
//! conformance suite checks that each reference resolves. The top-level
//! entry point is [`Vocabulary::full()`](crate::Vocabulary::full).

/// A vocabulary namespace (e.g., ActivityStreams, the Mastodon extension).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Namespace {
    /// The conventional prefix used in an `@context` (e.g., `"as"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace. Empty for JSON-LD keywords.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
    /// Whether terms of this namespace are JSON-LD keywords that are never
    /// prefixed with a document alias.
    pub keyword: bool,
}

/// A vocabulary class (a concrete document type such as `Note`).
///
/// The three relation lists are authored once from the vocabulary's
/// inheritance and disjointness declarations. They are complete: `extends`
/// lists every ancestor (nearest first), `extended_by` lists every known
/// descendant. Nothing at runtime walks them transitively.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Class {
    /// Full IRI (e.g., `"https://www.w3.org/ns/activitystreams#Note"`).
    pub id: &'static str,
    /// Local name, unique across the vocabulary (e.g., `"Note"`).
    pub name: &'static str,
    /// IRI of the namespace the class belongs to.
    pub namespace: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Direct parents (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
    /// Every ancestor, nearest first.
    pub extends: &'static [&'static str],
    /// Every class that can never describe the same value.
    pub disjoint_with: &'static [&'static str],
    /// Every known descendant.
    pub extended_by: &'static [&'static str],
}

/// A vocabulary property.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Local name, used as the JSON key (e.g., `"content"`).
    pub name: &'static str,
    /// IRI of the namespace the property belongs to.
    pub namespace: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Whether the property admits at most one value.
    pub functional: bool,
    /// Names of the classes that declare this property. Subclasses inherit it.
    pub domain: &'static [&'static str],
    /// Ordered range: class names (which admit their descendants too),
    /// datatype IRIs, or [`iris::RDF_LANG_STRING`].
    pub range: &'static [&'static str],
    /// Whether the property also reads and writes a `<name>Map` key holding
    /// natural-language maps.
    pub natural_language: bool,
    /// Whether a bare string must carry a URI scheme to be read as an IRI
    /// reference instead of a lexical value.
    pub iri_requires_scheme: bool,
    /// Whether a single-valued list serializes as a bare value instead of a
    /// one-element array.
    pub collapse_single: bool,
}

impl Property {
    /// The JSON key holding natural-language maps, if the property has one.
    #[must_use]
    pub fn map_name(&self) -> Option<String> {
        self.natural_language.then(|| format!("{}Map", self.name))
    }
}

/// A complete namespace module: namespace metadata + classes + properties.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// All classes defined in this namespace.
    pub classes: Vec<Class>,
    /// All properties defined in this namespace, in declaration order.
    pub properties: Vec<Property>,
}

/// The complete vocabulary.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vocabulary {
    /// Vocabulary version.
    pub version: &'static str,
    /// All namespace modules in dependency order.
    pub namespaces: Vec<NamespaceModule>,
}

impl Vocabulary {
    /// Looks up a class by its local name. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, name: &str) -> Option<&Class> {
        self.classes().find(|c| c.name == name)
    }

    /// Looks up a property by namespace IRI and local name.
    #[must_use]
    pub fn find_property(&self, namespace: &str, name: &str) -> Option<&Property> {
        self.properties()
            .find(|p| p.namespace == namespace && p.name == name)
    }

    /// Looks up a namespace by its IRI.
    #[must_use]
    pub fn find_namespace(&self, iri: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .map(|m| &m.namespace)
            .find(|ns| ns.iri == iri)
    }

    /// Iterates over the properties `class` itself declares (not the ones
    /// it inherits), in declaration order.
    pub fn declared_properties<'a>(&'a self, class: &'a Class) -> impl Iterator<Item = &'a Property> {
        self.properties().filter(move |p| p.domain.contains(&class.name))
    }

    /// Iterates over every class, namespace by namespace.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.namespaces.iter().flat_map(|m| m.classes.iter())
    }

    /// Iterates over every property in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.namespaces.iter().flat_map(|m| m.properties.iter())
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of properties across all namespaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.properties.len()).sum()
    }
}

/// Standard IRI constants used across all namespace modules.
pub mod iris {
    /// ActivityStreams namespace.
    pub const NS_AS: &str = "https://www.w3.org/ns/activitystreams";
    /// Mastodon extension namespace.
    pub const NS_TOOT: &str = "http://joinmastodon.org/ns#";
    /// JSON-LD keywords pseudo-namespace.
    pub const NS_JSONLD: &str = "";

    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:duration`.
    pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `rdf:langString`, realized as a natural-language map.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// BCP 47 language tag.
    pub const BCP47: &str = "http://tools.ietf.org/html/bcp47";
    /// RFC 2045 media type.
    pub const RFC2045: &str = "https://tools.ietf.org/html/rfc2045";
    /// RFC 5988 link relation.
    pub const RFC5988: &str = "https://tools.ietf.org/html/rfc5988";

    /// Every datatype IRI a property range may name.
    pub const DATATYPES: &[&str] = &[
        XSD_STRING,
        XSD_BOOLEAN,
        XSD_DATETIME,
        XSD_DURATION,
        XSD_FLOAT,
        XSD_NON_NEGATIVE_INTEGER,
        XSD_ANY_URI,
        RDF_LANG_STRING,
        BCP47,
        RFC2045,
        RFC5988,
    ];
}
