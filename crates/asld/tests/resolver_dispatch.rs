//! An inbox built from the resolver strategies: documents are dispatched
//! on their exact type first, on capability second, and sensitive content
//! is held back by a predicate.

use std::sync::Arc;

use asld::resolver::{
    Callback, DocumentResolver, InterfacePredicatedResolver, InterfaceResolver, Predicate,
    Resolve, TypePredicatedResolver, TypeResolver,
};
use asld::streams::{self, Article, Create, Follow, Node, Note, VocabularyType};
use asld::{DecodeOptions, Error};
use serde_json::{json, Map, Value};

const AS: &str = "https://www.w3.org/ns/activitystreams";

#[derive(Debug, Default)]
struct Inbox {
    follows: Vec<String>,
    notes: Vec<String>,
    other: Vec<&'static str>,
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn decode(value: Value) -> Node {
    streams::to_node(&object(value), &streams::manager(), DecodeOptions::default()).unwrap()
}

fn id_of(record: &asld::TypeRecord) -> String {
    record.id().map(ToString::to_string).unwrap_or_default()
}

fn activities() -> DocumentResolver<Inbox, &'static str> {
    DocumentResolver::new(
        Arc::new(streams::manager()),
        vec![
            Callback::on::<Follow, _>(|inbox: &mut Inbox, follow| {
                inbox.follows.push(id_of(&follow));
                "follow"
            }),
            Callback::on::<Create, _>(|inbox: &mut Inbox, create| {
                inbox.notes.push(id_of(&create));
                "create"
            }),
        ],
    )
    .unwrap()
}

fn exact() -> TypeResolver<Inbox, &'static str> {
    TypeResolver::new(vec![Callback::on::<Note, _>(|inbox: &mut Inbox, note| {
        inbox.notes.push(id_of(&note));
        "note"
    })])
    .unwrap()
}

fn by_capability() -> InterfaceResolver<Inbox, &'static str> {
    InterfaceResolver::new(vec![
        Callback::named("Object", |inbox: &mut Inbox, _| {
            inbox.other.push("object");
            "object"
        }),
        Callback::named("Link", |inbox: &mut Inbox, _| {
            inbox.other.push("link");
            "link"
        }),
    ])
    .unwrap()
}

/// Exact type first, capability second.
fn route(inbox: &mut Inbox, node: Node) -> Result<&'static str, Error> {
    match exact().resolve(inbox, node.clone()) {
        Err(err) if err.is_unmatched() => by_capability().resolve(inbox, node),
        other => other,
    }
}

// =============================================================================
// Document dispatch
// =============================================================================

#[test]
fn activities_reach_their_callbacks() {
    let resolver = activities();
    let mut inbox = Inbox::default();
    let follow = object(json!({
        "@context": AS,
        "id": "https://b.example/follows/1",
        "type": "Follow",
        "actor": "https://b.example/users/bob",
        "object": "https://a.example/users/alice"
    }));
    let create = object(json!({
        "@context": [AS, { "toot": "http://joinmastodon.org/ns#" }],
        "id": "https://b.example/creates/1",
        "type": "Create",
        "object": { "type": "Note", "content": "hi" }
    }));
    assert_eq!(resolver.resolve(&mut inbox, &follow).unwrap(), "follow");
    assert_eq!(resolver.resolve(&mut inbox, &create).unwrap(), "create");
    assert_eq!(inbox.follows, ["https://b.example/follows/1"]);
    assert_eq!(inbox.notes, ["https://b.example/creates/1"]);
}

#[test]
fn unhandled_activities_fall_through() {
    let resolver = activities();
    let mut inbox = Inbox::default();
    let like = object(json!({ "@context": AS, "type": "Like", "object": "https://a.example/1" }));
    let err = resolver.resolve(&mut inbox, &like).unwrap_err();
    assert!(err.is_unmatched());

    // The caller decodes it itself and tries a broader strategy.
    let node = streams::to_node(&like, resolver.manager(), DecodeOptions::default()).unwrap();
    assert_eq!(route(&mut inbox, node).unwrap(), "object");
    assert_eq!(inbox.other, ["object"]);
}

#[test]
fn strict_document_resolution_rejects_bad_values() {
    let resolver = activities().with_options(DecodeOptions::strict());
    let bad = object(json!({ "@context": AS, "type": "Follow", "published": "yesterday" }));
    let err = resolver.resolve(&mut Inbox::default(), &bad).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
    assert!(!err.is_unmatched());
}

// =============================================================================
// Type then capability
// =============================================================================

#[test]
fn exact_match_wins() {
    let mut inbox = Inbox::default();
    let note = decode(json!({ "type": "Note", "id": "https://a.example/n/1" }));
    assert_eq!(route(&mut inbox, note).unwrap(), "note");
    assert_eq!(inbox.notes, ["https://a.example/n/1"]);
    assert!(inbox.other.is_empty());
}

#[test]
fn subtypes_fall_back_to_capability() {
    let mut inbox = Inbox::default();
    assert_eq!(route(&mut inbox, decode(json!({ "type": "Article" }))).unwrap(), "object");
    assert_eq!(route(&mut inbox, decode(json!({ "type": "Mention" }))).unwrap(), "link");
    assert_eq!(inbox.other, ["object", "link"]);
}

#[test]
fn typed_callbacks_reject_foreign_nodes() {
    // A typed callback under capability dispatch only takes its own type.
    let resolver: InterfaceResolver<(), ()> =
        InterfaceResolver::new(vec![Callback::on::<Note, _>(|_, _| ())]).unwrap();
    let err = resolver.resolve(&mut (), Article::new().into_node()).unwrap_err();
    assert!(matches!(err, Error::CannotAssertType { .. }));
}

// =============================================================================
// Predicates
// =============================================================================

fn not_sensitive() -> Predicate<Inbox> {
    Predicate::on::<Note, _>(|_, note: &Note| {
        note.value("sensitive").and_then(|v| v.xsd_boolean()) != Some(true)
    })
}

#[test]
fn sensitive_notes_are_held_back() {
    let gate = TypePredicatedResolver::new(exact(), not_sensitive()).unwrap();
    let mut inbox = Inbox::default();

    let plain = decode(json!({ "type": "Note", "id": "https://a.example/n/1" }));
    assert_eq!(gate.apply(&mut inbox, plain).unwrap(), Some("note"));

    let sensitive = decode(json!({ "type": "Note", "id": "https://a.example/n/2", "sensitive": true }));
    assert_eq!(gate.apply(&mut inbox, sensitive).unwrap(), None);

    assert_eq!(inbox.notes, ["https://a.example/n/1"]);
}

#[test]
fn type_gates_only_take_their_type() {
    let gate = TypePredicatedResolver::new(exact(), not_sensitive()).unwrap();
    let err = gate
        .apply(&mut Inbox::default(), decode(json!({ "type": "Article" })))
        .unwrap_err();
    assert!(matches!(err, Error::PredicateUnmatched(ref name) if name == "Article"));
}

#[test]
fn capability_gates_take_any_satisfying_type() {
    let predicate = Predicate::named("Object", |_: &mut Inbox, node: &Node| {
        node.record().declares("content")
    });
    let gate = InterfacePredicatedResolver::new(by_capability(), predicate).unwrap();
    let mut inbox = Inbox::default();
    let article = decode(json!({ "type": "Article", "content": "long read" }));
    assert_eq!(gate.apply(&mut inbox, article).unwrap(), Some("object"));

    let err = gate
        .apply(&mut inbox, decode(json!({ "type": "Mention" })))
        .unwrap_err();
    assert!(matches!(err, Error::PredicateUnmatched(_)));
}

#[test]
fn gates_validate_their_predicate() {
    let built = TypePredicatedResolver::new(
        exact(),
        Predicate::named("Banana", |_: &mut Inbox, _: &Node| true),
    );
    assert!(matches!(built, Err(Error::Construction(_))));
}

#[test]
fn bindings_round_trip_through_nodes() {
    let mut note = Note::new();
    note.list_mut("content").unwrap().append_xsd_string("built by hand").unwrap();
    let node = note.clone().into_node();
    assert_eq!(node.type_name(), "Note");
    assert_eq!(Note::from_node(node).unwrap(), note);
}

#[test]
fn every_type_reaches_exactly_its_own_callback() {
    // Registered back to front so no callback wins by position alone.
    let callbacks = streams::TYPE_NAMES
        .iter()
        .rev()
        .map(|&name| {
            Callback::named(name, move |seen: &mut Vec<&'static str>, node: Node| {
                assert_eq!(node.type_name(), name);
                seen.push(name);
                name
            })
        })
        .collect();
    let resolver = DocumentResolver::new(Arc::new(streams::manager()), callbacks).unwrap();

    let mut seen = Vec::new();
    for &name in streams::TYPE_NAMES {
        let doc = object(json!({ "@context": AS, "type": name }));
        assert_eq!(resolver.resolve(&mut seen, &doc).unwrap(), name);
    }
    assert_eq!(seen, streams::TYPE_NAMES);
}
