//! Single property values: a tagged union over the kinds a property
//! declares.
//!
//! Besides its declared kinds, every value may instead hold an IRI
//! reference (kind index [`IRI_KIND`]) or a JSON value nothing could read
//! ([`UNKNOWN_KIND`]). Declared kinds are indexed `0..N` in declaration
//! order. Holding one kind clears every other.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Duration, FixedOffset};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::catalog::{Kind, PropertyEntry};
use crate::error::{Error, Result};
use crate::iri::Iri;
use crate::language::LanguageMap;
use crate::literal::Literal;
use crate::manager::Decoder;
use crate::record::TypeRecord;

/// Kind index of an IRI reference.
pub const IRI_KIND: i32 = -2;
/// Kind index of an unknown value, and of an empty one.
pub const UNKNOWN_KIND: i32 = -1;

/// What a value holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// A reference to a document elsewhere.
    Iri(Iri),
    /// JSON none of the declared kinds could read, kept verbatim.
    Unknown(Value),
    /// A lexical value.
    Literal(Literal),
    /// A nested document.
    Record(Box<TypeRecord>),
    /// A natural-language map.
    Language(LanguageMap),
}

impl Member {
    fn label(&self) -> String {
        match self {
            Member::Iri(_) => "IRI".to_string(),
            Member::Unknown(_) => "unknown".to_string(),
            Member::Literal(literal) => literal.datatype().name().to_string(),
            Member::Record(record) => record.type_name().to_string(),
            Member::Language(_) => Kind::Language.label().to_string(),
        }
    }

    /// Order within one kind.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Member::Iri(a), Member::Iri(b)) => a.cmp(b),
            (Member::Literal(a), Member::Literal(b)) => a.compare(b),
            (Member::Record(a), Member::Record(b)) => a.compare(b),
            (Member::Language(a), Member::Language(b)) => a.cmp(b),
            (Member::Unknown(a), Member::Unknown(b)) => a.to_string().cmp(&b.to_string()),
            _ => Ordering::Equal,
        }
    }
}

/// One value of a property.
#[derive(Clone)]
pub struct PropertyValue {
    entry: &'static PropertyEntry,
    member: Option<Member>,
    // Set only while `member` is unknown JSON read from the `<name>Map` key.
    map_keyed: bool,
}

macro_rules! literal_accessors {
    ($(
        $variant:ident, $label:literal => $is:ident, $get:ident, $set:ident ($owned:ty) -> $borrowed:ty, |$v:ident| $borrow:expr;
    )+) => {
        $(
            #[doc = concat!("True if the value holds ", $label, ".")]
            #[must_use]
            pub fn $is(&self) -> bool {
                matches!(self.member, Some(Member::Literal(Literal::$variant(_))))
            }

            #[doc = concat!("The value, if it holds ", $label, ".")]
            #[must_use]
            pub fn $get(&self) -> Option<$borrowed> {
                match &self.member {
                    Some(Member::Literal(Literal::$variant($v))) => Some($borrow),
                    _ => None,
                }
            }

            #[doc = concat!("Sets the value to ", $label, ", clearing any other kind.")]
            ///
            /// # Errors
            ///
            /// [`Error::KindNotDeclared`] if the property does not declare the kind.
            pub fn $set(&mut self, value: $owned) -> Result<()> {
                self.set_literal(Literal::$variant(value))
            }
        )+
    };
}

impl PropertyValue {
    /// An empty value of the property described by `entry`.
    #[must_use]
    pub fn new(entry: &'static PropertyEntry) -> Self {
        Self {
            entry,
            member: None,
            map_keyed: false,
        }
    }

    pub(crate) fn with(entry: &'static PropertyEntry, member: Member) -> Self {
        Self {
            entry,
            member: Some(member),
            map_keyed: false,
        }
    }

    fn hold(&mut self, member: Member) {
        self.member = Some(member);
        self.map_keyed = false;
    }

    /// The property this is a value of.
    #[must_use]
    pub fn entry(&self) -> &'static PropertyEntry {
        self.entry
    }

    /// The property's local name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.entry.name()
    }

    /// True if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.member.is_none()
    }

    /// What is held.
    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    /// Kind index of what is held: [`IRI_KIND`], [`UNKNOWN_KIND`] (also for
    /// an empty value), or the declared kind's position.
    #[must_use]
    pub fn kind_index(&self) -> i32 {
        match &self.member {
            None | Some(Member::Unknown(_)) => UNKNOWN_KIND,
            Some(Member::Iri(_)) => IRI_KIND,
            Some(member) => self.declared_index(member).map_or(UNKNOWN_KIND, to_kind_index),
        }
    }

    fn declared_index(&self, member: &Member) -> Option<usize> {
        match member {
            Member::Iri(_) | Member::Unknown(_) => None,
            Member::Literal(literal) => self.entry.literal_index(literal.datatype()),
            Member::Record(record) => self.entry.type_index(record.type_name()),
            Member::Language(_) => self.entry.language_index(),
        }
    }

    /// Replaces what is held.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property declares no kind that
    /// admits `member` (IRIs and unknown values are always admitted), or
    /// [`Error::NonFiniteFloat`] for a NaN or infinite `xsd:float`, which
    /// JSON cannot carry.
    pub fn set(&mut self, member: Member) -> Result<()> {
        if let Member::Literal(Literal::Float(x)) = &member {
            if !x.is_finite() {
                return Err(Error::NonFiniteFloat {
                    property: self.name(),
                });
            }
        }
        let admitted = matches!(member, Member::Iri(_) | Member::Unknown(_))
            || self.declared_index(&member).is_some();
        if !admitted {
            return Err(Error::KindNotDeclared {
                property: self.name(),
                kind: member.label(),
            });
        }
        self.hold(member);
        Ok(())
    }

    /// Clears the value.
    pub fn clear(&mut self) {
        self.member = None;
        self.map_keyed = false;
    }

    /// Takes what is held, leaving the value empty.
    pub fn take(&mut self) -> Option<Member> {
        self.map_keyed = false;
        self.member.take()
    }

    /// True if the value holds an IRI reference.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self.member, Some(Member::Iri(_)))
    }

    /// The IRI reference, if one is held.
    #[must_use]
    pub fn iri(&self) -> Option<&Iri> {
        match &self.member {
            Some(Member::Iri(iri)) => Some(iri),
            _ => None,
        }
    }

    /// Holds an IRI reference.
    pub fn set_iri(&mut self, iri: Iri) {
        self.hold(Member::Iri(iri));
    }

    /// True if the value holds JSON no declared kind could read.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self.member, Some(Member::Unknown(_)))
    }

    /// The unread JSON, if held.
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        match &self.member {
            Some(Member::Unknown(value)) => Some(value),
            _ => None,
        }
    }

    /// Holds arbitrary JSON verbatim.
    pub fn set_unknown(&mut self, value: Value) {
        self.hold(Member::Unknown(value));
    }

    /// Holds arbitrary JSON verbatim, written under the property's
    /// `<name>Map` key.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property has no natural-language
    /// form.
    pub fn set_unknown_map(&mut self, value: Value) -> Result<()> {
        if self.entry.language_index().is_none() {
            return Err(Error::KindNotDeclared {
                property: self.name(),
                kind: Kind::Language.label().to_string(),
            });
        }
        self.member = Some(Member::Unknown(value));
        self.map_keyed = true;
        Ok(())
    }

    /// True if the value is written under the property's `<name>Map` key: a
    /// natural-language map, or unknown JSON that was read from that key.
    #[must_use]
    pub fn is_map_keyed(&self) -> bool {
        match self.member {
            Some(Member::Language(_)) => true,
            Some(Member::Unknown(_)) => self.map_keyed,
            _ => false,
        }
    }

    /// True if the value holds a nested document.
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self.member, Some(Member::Record(_)))
    }

    /// True if the value holds a nested document of type `name`.
    #[must_use]
    pub fn is_type(&self, name: &str) -> bool {
        self.record().is_some_and(|r| r.type_name() == name)
    }

    /// The nested document, if held.
    #[must_use]
    pub fn record(&self) -> Option<&TypeRecord> {
        match &self.member {
            Some(Member::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Mutable access to the nested document, if held.
    pub fn record_mut(&mut self) -> Option<&mut TypeRecord> {
        match &mut self.member {
            Some(Member::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Holds a nested document.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property's range does not admit the
    /// record's type.
    pub fn set_record(&mut self, record: TypeRecord) -> Result<()> {
        self.set(Member::Record(Box::new(record)))
    }

    /// The lexical value, if held.
    #[must_use]
    pub fn literal(&self) -> Option<&Literal> {
        match &self.member {
            Some(Member::Literal(literal)) => Some(literal),
            _ => None,
        }
    }

    /// Holds a lexical value.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property does not declare the
    /// literal's datatype.
    pub fn set_literal(&mut self, literal: Literal) -> Result<()> {
        self.set(Member::Literal(literal))
    }

    literal_accessors! {
        String, "an `xsd:string`" => is_xsd_string, xsd_string, set_xsd_string(String) -> &str, |v| v.as_str();
        Boolean, "an `xsd:boolean`" => is_xsd_boolean, xsd_boolean, set_xsd_boolean(bool) -> bool, |v| *v;
        DateTime, "an `xsd:dateTime`" => is_xsd_date_time, xsd_date_time, set_xsd_date_time(DateTime<FixedOffset>) -> DateTime<FixedOffset>, |v| *v;
        Duration, "an `xsd:duration`" => is_xsd_duration, xsd_duration, set_xsd_duration(Duration) -> Duration, |v| *v;
        Float, "an `xsd:float`" => is_xsd_float, xsd_float, set_xsd_float(f64) -> f64, |v| *v;
        NonNegativeInteger, "an `xsd:nonNegativeInteger`" => is_xsd_non_negative_integer, xsd_non_negative_integer, set_xsd_non_negative_integer(u64) -> u64, |v| *v;
        AnyUri, "an `xsd:anyURI`" => is_xsd_any_uri, xsd_any_uri, set_xsd_any_uri(Iri) -> &Iri, |v| v;
        LanguageTag, "a BCP 47 language tag" => is_bcp47, bcp47, set_bcp47(String) -> &str, |v| v.as_str();
        MediaType, "an RFC 2045 media type" => is_rfc2045, rfc2045, set_rfc2045(String) -> &str, |v| v.as_str();
        LinkRelation, "an RFC 5988 link relation" => is_rfc5988, rfc5988, set_rfc5988(String) -> &str, |v| v.as_str();
    }

    /// True if the value holds a natural-language map.
    #[must_use]
    pub fn is_language_map(&self) -> bool {
        matches!(self.member, Some(Member::Language(_)))
    }

    /// The natural-language map, if held.
    #[must_use]
    pub fn language_map(&self) -> Option<&LanguageMap> {
        match &self.member {
            Some(Member::Language(map)) => Some(map),
            _ => None,
        }
    }

    /// True if the value holds text for language `tag`.
    #[must_use]
    pub fn has_language(&self, tag: &str) -> bool {
        self.language_map().is_some_and(|m| m.contains(tag))
    }

    /// The text for language `tag`, if held.
    #[must_use]
    pub fn language(&self, tag: &str) -> Option<&str> {
        self.language_map().and_then(|m| m.get(tag))
    }

    /// Sets the text for language `tag`. A value holding any other kind
    /// switches to a map with this single entry.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property has no natural-language
    /// form.
    pub fn set_language(&mut self, tag: impl Into<String>, text: impl Into<String>) -> Result<()> {
        if let Some(Member::Language(map)) = &mut self.member {
            map.insert(tag, text);
            return Ok(());
        }
        let mut map = LanguageMap::new();
        map.insert(tag, text);
        self.set(Member::Language(map))
    }

    /// Total order: kind index first, then value within the kind. An empty
    /// value sorts before an unknown one, and unknown JSON from the plain
    /// key before the same JSON from the `<name>Map` key.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let (a, b) = (self.kind_index(), other.kind_index());
        if a != b {
            return a.cmp(&b);
        }
        match (&self.member, &other.member) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.compare(y).then(self.map_keyed.cmp(&other.map_keyed)),
        }
    }

    /// Strict order under [`compare`](Self::compare).
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Writes what is held. `None` for an empty value.
    #[must_use]
    pub fn serialize(&self) -> Option<Value> {
        Some(match self.member.as_ref()? {
            Member::Iri(iri) => Value::String(iri.to_string()),
            Member::Unknown(value) => value.clone(),
            Member::Literal(literal) => literal.to_json(),
            Member::Record(record) => Value::Object(record.serialize()),
            Member::Language(map) => map.to_json(),
        })
    }

    /// Reads one value from the property's plain key.
    ///
    /// Tried in order: an IRI reference (a string, which must carry a scheme
    /// if the property requires one), a nested document of a declared type
    /// named by the object's `type`, then each declared datatype.
    pub(crate) fn decode(entry: &'static PropertyEntry, raw: &Value, decoder: &Decoder<'_>) -> Result<Self> {
        let property = entry.property();
        if let Value::String(text) = raw {
            if let Some(iri) = Iri::parse(text) {
                if iri.has_scheme() || !property.iri_requires_scheme {
                    return Ok(Self::with(entry, Member::Iri(iri)));
                }
            }
        }
        if let Value::Object(map) = raw {
            let named = declared_type_names(map, decoder);
            for kind in entry.kinds() {
                let Kind::Type(class) = kind else { continue };
                if !named.contains(&class.name) {
                    continue;
                }
                match decoder.manager().deserialize(class.name, map, decoder) {
                    Ok(record) => return Ok(Self::with(entry, Member::Record(Box::new(record)))),
                    Err(err) => trace!(property = property.name, candidate = class.name, %err, "nested type rejected"),
                }
            }
        }
        for kind in entry.kinds() {
            let Kind::Literal(datatype) = kind else { continue };
            if let Some(literal) = Literal::parse(*datatype, raw) {
                return Ok(Self::with(entry, Member::Literal(literal)));
            }
        }
        Self::unmatched(entry, raw, decoder, false)
    }

    /// Reads one natural-language map from the property's `<name>Map` key.
    pub(crate) fn decode_language(
        entry: &'static PropertyEntry,
        raw: &Value,
        decoder: &Decoder<'_>,
    ) -> Result<Self> {
        if entry.language_index().is_some() {
            if let Some(map) = LanguageMap::from_json(raw) {
                return Ok(Self::with(entry, Member::Language(map)));
            }
        }
        Self::unmatched(entry, raw, decoder, true)
    }

    fn unmatched(
        entry: &'static PropertyEntry,
        raw: &Value,
        decoder: &Decoder<'_>,
        map_keyed: bool,
    ) -> Result<Self> {
        if decoder.options().strict {
            warn!(property = entry.name(), "value matches none of its kinds");
            return Err(Error::MalformedDocument(format!(
                "value of {} matches none of its kinds: {raw}",
                entry.name()
            )));
        }
        debug!(property = entry.name(), map_keyed, "keeping unreadable value verbatim");
        Ok(Self {
            entry,
            member: Some(Member::Unknown(raw.clone())),
            map_keyed,
        })
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entry, other.entry)
            && self.member == other.member
            && self.map_keyed == other.map_keyed
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyValue")
            .field("property", &self.name())
            .field("member", &self.member)
            .field("map_keyed", &self.map_keyed)
            .finish()
    }
}

fn to_kind_index(position: usize) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}

/// Names of the known types an object's `type` key resolves to.
fn declared_type_names(map: &serde_json::Map<String, Value>, decoder: &Decoder<'_>) -> Vec<&'static str> {
    let catalog = decoder.manager().catalog();
    let lookup = |text: &str| catalog.lookup_type(text, decoder.aliases()).map(|c| c.name);
    match map.get("type") {
        Some(Value::String(text)) => lookup(text).into_iter().collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).filter_map(lookup).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::alias::AliasMap;
    use crate::catalog::TypeCatalog;
    use crate::manager::{DecodeOptions, Manager};
    use asld_vocab::model::iris::NS_AS;
    use serde_json::json;

    fn entry(name: &str) -> &'static PropertyEntry {
        TypeCatalog::global().property(NS_AS, name).unwrap()
    }

    fn decode_with(name: &str, raw: Value, options: DecodeOptions) -> Result<PropertyValue> {
        let manager = Manager::with_catalog(TypeCatalog::global());
        let decoder = Decoder::new(&manager, Arc::new(AliasMap::new()), options);
        PropertyValue::decode(entry(name), &raw, &decoder)
    }

    fn decode(name: &str, raw: Value) -> PropertyValue {
        decode_with(name, raw, DecodeOptions::lenient()).unwrap()
    }

    #[test]
    fn iri_wins_over_string() {
        let v = decode("url", json!("https://example.com/page"));
        assert!(v.is_iri());
        assert_eq!(v.kind_index(), IRI_KIND);
    }

    #[test]
    fn scheme_requirement_keeps_plain_text_lexical() {
        let v = decode("content", json!("Hello"));
        assert!(v.is_xsd_string());
        assert_eq!(v.xsd_string(), Some("Hello"));
        assert_eq!(v.kind_index(), 0);

        let v = decode("attributedTo", json!("people/alice"));
        assert!(v.is_iri());
    }

    #[test]
    fn nested_objects_pick_their_named_type() {
        let v = decode("object", json!({ "type": "Note", "content": "hi" }));
        assert!(v.is_type("Note"));
        let index = entry("object").type_index("Note").unwrap();
        assert_eq!(v.kind_index(), to_kind_index(index));
    }

    #[test]
    fn untyped_objects_are_unknown_when_lenient() {
        let v = decode("object", json!({ "content": "hi" }));
        assert!(v.is_unknown());
        assert_eq!(v.kind_index(), UNKNOWN_KIND);
    }

    #[test]
    fn unmatched_values_fail_when_strict() {
        let err = decode_with("sensitive", json!("yes"), DecodeOptions::strict()).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn closed_reads_every_declared_kind() {
        assert!(decode("closed", json!(true)).is_xsd_boolean());
        assert!(decode("closed", json!("2024-01-01T00:00:00Z")).is_xsd_date_time());
        assert!(decode("closed", json!("https://example.com/q/1")).is_iri());
        assert!(decode("closed", json!({ "type": "Link", "href": "https://x.example" })).is_type("Link"));
    }

    #[test]
    fn setting_one_kind_clears_the_others() {
        let mut v = PropertyValue::new(entry("content"));
        v.set_xsd_string("text".into()).unwrap();
        v.set_language("en", "text").unwrap();
        assert!(!v.is_xsd_string());
        assert!(v.has_language("en"));
        v.set_iri(Iri::parse("https://example.com").unwrap());
        assert!(!v.is_language_map());
        assert!(v.is_iri());
        v.clear();
        assert!(v.is_empty() && !v.is_iri() && !v.is_unknown());
    }

    #[test]
    fn undeclared_kinds_are_refused() {
        let mut v = PropertyValue::new(entry("sensitive"));
        let err = v.set_xsd_string("no".into()).unwrap_err();
        assert!(matches!(err, Error::KindNotDeclared { property: "sensitive", .. }));
        assert!(v.is_empty());
        let err = v.set_language("en", "no").unwrap_err();
        assert!(matches!(err, Error::KindNotDeclared { .. }));
    }

    #[test]
    fn records_outside_the_range_are_refused() {
        let mut v = PropertyValue::new(entry("icon"));
        let note = TypeRecord::new("Note").unwrap();
        assert!(v.set_record(note).is_err());
        let image = TypeRecord::new("Image").unwrap();
        v.set_record(image).unwrap();
        assert!(v.is_type("Image"));
    }

    #[test]
    fn order_is_by_kind_then_value() {
        let iri = decode("closed", json!("https://a.example"));
        let later_iri = decode("closed", json!("https://b.example"));
        let empty = PropertyValue::new(entry("closed"));
        let unknown = decode("closed", json!([1, 2]));
        let boolean = decode("closed", json!(false));

        assert!(iri.less_than(&later_iri));
        assert!(iri.less_than(&empty));
        assert!(empty.less_than(&unknown));
        assert!(unknown.less_than(&boolean));
        assert!(!boolean.less_than(&boolean.clone()));
    }

    #[test]
    fn serialize_writes_held_kind() {
        assert_eq!(decode("sensitive", json!(true)).serialize(), Some(json!(true)));
        assert_eq!(PropertyValue::new(entry("sensitive")).serialize(), None);
        let mut v = PropertyValue::new(entry("name"));
        v.set_language("fr", "Bonjour").unwrap();
        assert_eq!(v.serialize(), Some(json!({ "fr": "Bonjour" })));
    }

    #[test]
    fn unreadable_maps_remember_their_key() {
        let manager = Manager::with_catalog(TypeCatalog::global());
        let decoder = Decoder::new(&manager, Arc::new(AliasMap::new()), DecodeOptions::lenient());
        let mut v = PropertyValue::decode_language(entry("name"), &json!({ "en": 1 }), &decoder).unwrap();
        assert!(v.is_unknown());
        assert!(v.is_map_keyed());

        let plain = decode("name", json!({ "en": 1 }));
        assert!(plain.is_unknown() && !plain.is_map_keyed());
        assert_ne!(plain, v);
        assert!(plain.less_than(&v));

        v.set_unknown(json!({ "en": 1 }));
        assert!(!v.is_map_keyed());
        assert_eq!(plain, v);
    }

    #[test]
    fn unknown_map_payloads_need_a_language_form() {
        let mut v = PropertyValue::new(entry("name"));
        v.set_unknown_map(json!([1])).unwrap();
        assert!(v.is_map_keyed());
        v.clear();
        assert!(!v.is_map_keyed());

        let mut closed = PropertyValue::new(entry("sensitive"));
        assert!(matches!(closed.set_unknown_map(json!(1)), Err(Error::KindNotDeclared { .. })));
    }

    #[test]
    fn non_finite_floats_are_refused() {
        let mut v = PropertyValue::new(entry("latitude"));
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = v.set_xsd_float(x).unwrap_err();
            assert!(matches!(err, Error::NonFiniteFloat { property: "latitude" }));
        }
        assert!(v.is_empty());
        v.set_xsd_float(36.75).unwrap();
        assert_eq!(v.serialize(), Some(json!(36.75)));
    }
}
