//! Decode-then-encode of realistic federated documents.
//!
//! Every document here is shaped so that the engine's canonical output is
//! the input itself: values that would be normalized (one-element arrays,
//! integral floats, empty arrays) are covered separately below.

use asld::streams::{self, Node};
use asld::{DecodeOptions, Error};
use serde_json::{json, Value};

fn decode(doc: &Value, options: DecodeOptions) -> Result<Node, Error> {
    let map = doc.as_object().expect("test documents are objects");
    streams::to_node(map, &streams::manager(), options)
}

fn assert_round_trip(doc: Value) {
    let node = decode(&doc, DecodeOptions::default()).expect("document decodes");
    let out = Value::Object(streams::serialize(&node));
    assert_eq!(out, doc);
}

// =============================================================================
// Lossless documents
// =============================================================================

#[test]
fn mastodon_style_create() {
    assert_round_trip(json!({
        "@context": [
            "https://www.w3.org/ns/activitystreams",
            { "toot": "http://joinmastodon.org/ns#", "Emoji": "toot:Emoji", "sensitive": "as:sensitive" }
        ],
        "id": "https://social.example/users/alice/statuses/1/activity",
        "type": "Create",
        "actor": "https://social.example/users/alice",
        "published": "2024-05-01T12:00:00Z",
        "to": "https://www.w3.org/ns/activitystreams#Public",
        "cc": [
            "https://social.example/users/alice/followers",
            "https://other.example/users/bob"
        ],
        "object": {
            "id": "https://social.example/users/alice/statuses/1",
            "type": "Note",
            "summary": null,
            "inReplyTo": null,
            "published": "2024-05-01T12:00:00Z",
            "url": "https://social.example/@alice/1",
            "attributedTo": "https://social.example/users/alice",
            "sensitive": false,
            "content": "<p>Hello :blobcat: @bob</p>",
            "contentMap": { "en": "<p>Hello :blobcat: @bob</p>" },
            "tag": [
                {
                    "id": "https://social.example/emojis/1",
                    "type": "Emoji",
                    "name": ":blobcat:",
                    "updated": "2023-01-01T00:00:00Z",
                    "icon": {
                        "type": "Image",
                        "mediaType": "image/png",
                        "url": "https://social.example/emojis/blobcat.png"
                    }
                },
                {
                    "type": "Mention",
                    "href": "https://other.example/users/bob",
                    "name": "@bob@other.example"
                }
            ],
            "conversation": "tag:social.example,2024-05-01:objectId=1:objectType=Conversation"
        }
    }));
}

#[test]
fn actor_with_extension_keys() {
    assert_round_trip(json!({
        "@context": [
            "https://www.w3.org/ns/activitystreams",
            "https://w3id.org/security/v1",
            { "toot": "http://joinmastodon.org/ns#", "discoverable": "toot:discoverable" }
        ],
        "id": "https://social.example/users/alice",
        "type": "Person",
        "preferredUsername": "alice",
        "name": "Alice",
        "summary": "<p>Bio</p>",
        "inbox": "https://social.example/users/alice/inbox",
        "outbox": "https://social.example/users/alice/outbox",
        "followers": "https://social.example/users/alice/followers",
        "following": "https://social.example/users/alice/following",
        "discoverable": true,
        "manuallyApprovesFollowers": false,
        "publicKey": {
            "id": "https://social.example/users/alice#main-key",
            "owner": "https://social.example/users/alice",
            "publicKeyPem": "-----BEGIN PUBLIC KEY-----\n...\n-----END PUBLIC KEY-----\n"
        },
        "endpoints": { "sharedInbox": "https://social.example/inbox" },
        "icon": {
            "type": "Image",
            "mediaType": "image/jpeg",
            "url": "https://social.example/avatars/alice.jpg"
        }
    }));
}

#[test]
fn aliased_vocabulary() {
    assert_round_trip(json!({
        "@context": { "as": "https://www.w3.org/ns/activitystreams" },
        "type": "as:Note",
        "id": "https://example.com/notes/1",
        "as:content": "aliased",
        "as:to": ["https://example.com/a", "https://example.com/b"]
    }));
}

#[test]
fn question_with_nested_collections() {
    assert_round_trip(json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "id": "https://social.example/polls/1",
        "type": "Question",
        "content": "Tabs or spaces?",
        "endTime": "2024-06-01T00:00:00+02:00",
        "closed": "2024-06-01T00:00:00Z",
        "oneOf": [
            { "type": "Note", "name": "Tabs", "replies": { "type": "Collection", "totalItems": 3 } },
            { "type": "Note", "name": "Spaces", "replies": { "type": "Collection", "totalItems": 5 } }
        ],
        "votersCount": 8
    }));
}

#[test]
fn places_and_durations() {
    assert_round_trip(json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Place",
        "name": "Fresno Area",
        "latitude": 36.75,
        "longitude": 119.7667,
        "radius": 15.5,
        "units": "miles",
        "duration": "PT2H30M"
    }));
}

#[test]
fn ordered_collections_keep_single_item_arrays() {
    assert_round_trip(json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "id": "https://social.example/users/alice/outbox",
        "type": "OrderedCollection",
        "totalItems": 1,
        "orderedItems": ["https://social.example/users/alice/statuses/1/activity"]
    }));
}

// =============================================================================
// Normalizations
// =============================================================================

#[test]
fn single_element_arrays_collapse() {
    let doc = json!({ "type": "Note", "to": ["https://example.com/a"] });
    let node = decode(&doc, DecodeOptions::default()).unwrap();
    let out = streams::serialize(&node);
    assert_eq!(out["to"], "https://example.com/a");
}

#[test]
fn empty_arrays_are_dropped() {
    let doc = json!({ "type": "Note", "attachment": [] });
    let node = decode(&doc, DecodeOptions::default()).unwrap();
    assert!(!streams::serialize(&node).contains_key("attachment"));
}

#[test]
fn missing_context_gets_the_default() {
    let node = decode(&json!({ "type": "Emoji", "name": ":x:" }), DecodeOptions::default()).unwrap();
    let out = streams::serialize(&node);
    assert_eq!(out["@context"], streams::default_context());
    // The document's own discriminator is kept.
    assert_eq!(out["type"], "Emoji");
}

// =============================================================================
// Strictness
// =============================================================================

#[test]
fn lenient_mode_keeps_unreadable_values() {
    let doc = json!({ "type": "Note", "sensitive": "very", "published": "last tuesday" });
    let node = decode(&doc, DecodeOptions::lenient()).unwrap();
    let record = node.record();
    assert!(record.value("sensitive").is_some_and(|v| v.is_unknown()));
    let out = streams::serialize(&node);
    assert_eq!(out["sensitive"], "very");
    assert_eq!(out["published"], "last tuesday");
}

#[test]
fn strict_mode_rejects_unreadable_values() {
    let doc = json!({ "type": "Note", "sensitive": "very" });
    let err = decode(&doc, DecodeOptions::strict()).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
}

#[test]
fn strict_mode_still_keeps_undeclared_keys() {
    let doc = json!({ "type": "Note", "x:custom": [1, 2, 3] });
    let node = decode(&doc, DecodeOptions::strict()).unwrap();
    assert_eq!(node.record().unknown()["x:custom"], json!([1, 2, 3]));
}
