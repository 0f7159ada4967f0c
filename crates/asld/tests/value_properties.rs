//! Property-based tests for value exclusivity and document round trips.
//!
//! A value holds at most one kind at a time, whichever setter ran last;
//! any document the application can author must read back equal to itself.

use std::cmp::Ordering;

use asld::catalog::PropertyEntry;
use asld::streams::{self, Node};
use asld::{
    Datatype, DecodeOptions, Iri, Kind, LanguageMap, Literal, Member, PropertyList, PropertyValue,
    TypeCatalog, TypeRecord,
};
use proptest::prelude::*;
use proptest::sample::Index;
use serde_json::{json, Value};

fn iri(n: u16) -> Iri {
    Iri::parse(&format!("https://example.com/{n}")).expect("valid IRI")
}

fn english(text: &str) -> LanguageMap {
    let mut map = LanguageMap::new();
    map.insert("en", text);
    map
}

// =============================================================================
// Mutual exclusivity
// =============================================================================

const LITERAL_PREDICATES: [(Datatype, fn(&PropertyValue) -> bool); 10] = [
    (Datatype::String, PropertyValue::is_xsd_string),
    (Datatype::Boolean, PropertyValue::is_xsd_boolean),
    (Datatype::DateTime, PropertyValue::is_xsd_date_time),
    (Datatype::Duration, PropertyValue::is_xsd_duration),
    (Datatype::Float, PropertyValue::is_xsd_float),
    (Datatype::NonNegativeInteger, PropertyValue::is_xsd_non_negative_integer),
    (Datatype::AnyUri, PropertyValue::is_xsd_any_uri),
    (Datatype::LanguageTag, PropertyValue::is_bcp47),
    (Datatype::MediaType, PropertyValue::is_rfc2045),
    (Datatype::LinkRelation, PropertyValue::is_rfc5988),
];

fn sample_literal(datatype: Datatype) -> Literal {
    let raw = match datatype {
        Datatype::String => json!("text"),
        Datatype::Boolean => json!(true),
        Datatype::DateTime => json!("2024-01-01T00:00:00Z"),
        Datatype::Duration => json!("PT1H"),
        Datatype::Float => json!(1.5),
        Datatype::NonNegativeInteger => json!(3),
        Datatype::AnyUri => json!("https://example.com/u"),
        Datatype::LanguageTag => json!("en"),
        Datatype::MediaType => json!("text/html"),
        Datatype::LinkRelation => json!("canonical"),
    };
    Literal::parse(datatype, &raw).expect("sample is lexically valid")
}

#[derive(Debug, Clone)]
enum Candidate {
    Held(Member),
    MapPayload,
}

impl Candidate {
    fn label(&self) -> &'static str {
        match self {
            Candidate::Held(Member::Iri(_)) => "iri",
            Candidate::Held(Member::Unknown(_)) | Candidate::MapPayload => "unknown",
            Candidate::Held(Member::Record(_)) => "record",
            Candidate::Held(Member::Language(_)) => "language",
            Candidate::Held(Member::Literal(literal)) => literal.datatype().name(),
        }
    }

    fn apply(&self, value: &mut PropertyValue) {
        match self {
            Candidate::Held(member) => value.set(member.clone()).expect("kind is declared"),
            Candidate::MapPayload => value
                .set_unknown_map(json!({ "en": 1 }))
                .expect("property has a language form"),
        }
    }
}

/// One candidate per declared kind, plus an IRI and unknown JSON.
fn candidates(entry: &'static PropertyEntry) -> Vec<Candidate> {
    let mut out = vec![
        Candidate::Held(Member::Iri(iri(1))),
        Candidate::Held(Member::Unknown(json!([1, 2]))),
    ];
    if entry.language_index().is_some() {
        out.push(Candidate::MapPayload);
    }
    for kind in entry.kinds() {
        out.push(Candidate::Held(match kind {
            Kind::Type(class) => {
                Member::Record(Box::new(TypeRecord::new(class.name).expect("cataloged type")))
            }
            Kind::Literal(datatype) => Member::Literal(sample_literal(*datatype)),
            Kind::Language => Member::Language(english("x")),
        }));
    }
    out
}

fn held_labels(value: &PropertyValue) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if value.is_iri() {
        labels.push("iri");
    }
    if value.is_unknown() {
        labels.push("unknown");
    }
    if value.is_record() {
        labels.push("record");
    }
    if value.is_language_map() {
        labels.push("language");
    }
    for (datatype, holds) in LITERAL_PREDICATES {
        if holds(value) {
            labels.push(datatype.name());
        }
    }
    labels
}

proptest! {
    /// after any two setters only the second kind is held; clear empties
    #[test]
    fn prop_set_clears_other_kinds(
        property in 0..TypeCatalog::global().properties().len(),
        first in any::<Index>(),
        second in any::<Index>(),
    ) {
        let entry = &TypeCatalog::global().properties()[property];
        let candidates = candidates(entry);
        let a = &candidates[first.index(candidates.len())];
        let b = &candidates[second.index(candidates.len())];

        let mut value = PropertyValue::new(entry);
        a.apply(&mut value);
        b.apply(&mut value);
        prop_assert_eq!(held_labels(&value), vec![b.label()]);
        prop_assert_eq!(value.is_map_keyed(), matches!(b, Candidate::MapPayload | Candidate::Held(Member::Language(_))));

        value.clear();
        prop_assert!(value.is_empty());
        prop_assert!(held_labels(&value).is_empty());
        prop_assert!(!value.is_map_keyed());
    }
}

// =============================================================================
// Round trip
// =============================================================================

#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Translated(String, String),
    Reference(u16),
    Unreadable(Vec<u8>),
    UnreadableMap(u8),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        "[a-z ]{0,6}".prop_map(Piece::Text),
        ("[a-z]{2}", "[a-z]{0,4}").prop_map(|(tag, text)| Piece::Translated(tag, text)),
        any::<u16>().prop_map(Piece::Reference),
        prop::collection::vec(any::<u8>(), 0..3).prop_map(Piece::Unreadable),
        any::<u8>().prop_map(Piece::UnreadableMap),
    ]
}

fn addressee() -> impl Strategy<Value = Piece> {
    prop_oneof![
        any::<u16>().prop_map(Piece::Reference),
        prop::collection::vec(any::<u8>(), 0..3).prop_map(Piece::Unreadable),
    ]
}

#[derive(Debug, Clone)]
struct Authored {
    person: bool,
    names: Vec<Piece>,
    content: Vec<String>,
    to: Vec<Piece>,
    sensitive: Option<bool>,
    username: Option<Piece>,
}

fn authored() -> impl Strategy<Value = Authored> {
    (
        any::<bool>(),
        prop::collection::vec(piece(), 0..4),
        prop::collection::vec("[a-z ]{0,6}", 0..3),
        prop::collection::vec(addressee(), 0..3),
        any::<Option<bool>>(),
        prop::option::of(piece()),
    )
        .prop_map(|(person, names, content, to, sensitive, username)| Authored {
            person,
            names,
            content,
            to,
            sensitive,
            username,
        })
}

fn push(list: &mut PropertyList, piece: &Piece) {
    match piece {
        Piece::Text(text) => list.append_xsd_string(text.clone()).expect("strings admitted"),
        Piece::Translated(tag, text) => {
            let mut map = LanguageMap::new();
            map.insert(tag.clone(), text.clone());
            list.append(Member::Language(map)).expect("maps admitted");
        }
        Piece::Reference(n) => list.append_iri(iri(*n)),
        Piece::Unreadable(bytes) => list.append(Member::Unknown(json!(bytes))).expect("unknown admitted"),
        Piece::UnreadableMap(n) => {
            list.append(Member::Unknown(Value::Null)).expect("unknown admitted");
            let last = list.len() - 1;
            list.get_mut(last)
                .expect("just appended")
                .set_unknown_map(json!({ "en": n }))
                .expect("property has a language form");
        }
    }
}

fn hold(value: &mut PropertyValue, piece: &Piece) {
    match piece {
        Piece::Text(text) => value.set_xsd_string(text.clone()).expect("strings admitted"),
        Piece::Translated(tag, text) => value
            .set_language(tag.clone(), text.clone())
            .expect("maps admitted"),
        Piece::Reference(n) => value.set_iri(iri(*n)),
        Piece::Unreadable(bytes) => value.set_unknown(json!(bytes)),
        Piece::UnreadableMap(n) => value
            .set_unknown_map(json!({ "en": n }))
            .expect("property has a language form"),
    }
}

fn build(doc: &Authored) -> TypeRecord {
    let mut record = TypeRecord::new(if doc.person { "Person" } else { "Note" }).expect("known type");
    let names = record.list_mut("name").expect("declared");
    for piece in &doc.names {
        push(names, piece);
    }
    let content = record.list_mut("content").expect("declared");
    for text in &doc.content {
        content.append_xsd_string(text.clone()).expect("strings admitted");
    }
    let to = record.list_mut("to").expect("declared");
    for piece in &doc.to {
        push(to, piece);
    }
    if let Some(flag) = doc.sensitive {
        record
            .value_mut("sensitive")
            .expect("declared")
            .set_xsd_boolean(flag)
            .expect("booleans admitted");
    }
    if let (true, Some(piece)) = (doc.person, &doc.username) {
        hold(record.value_mut("preferredUsername").expect("declared"), piece);
    }
    record
        .unknown_mut()
        .insert("@context".to_string(), streams::default_context());
    record
}

proptest! {
    /// serialize then decode yields an equivalent document
    #[test]
    fn prop_round_trip(doc in authored()) {
        let node = Node::try_from(build(&doc)).expect("cataloged type");
        let written = streams::serialize(&node);
        let read = streams::to_node(&written, &streams::manager(), DecodeOptions::lenient())
            .expect("written documents decode");

        prop_assert_eq!(read.type_name(), node.type_name());
        prop_assert_eq!(read.record().compare(node.record()), Ordering::Equal);
        prop_assert_eq!(node.record().compare(read.record()), Ordering::Equal);
        prop_assert_eq!(read.record(), node.record());
        prop_assert_eq!(streams::serialize(&read), written);
    }
}
