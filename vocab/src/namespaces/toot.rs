//! Mastodon extension namespace (`toot`).
//!
//! A small extension vocabulary that rides alongside ActivityStreams in the
//! same documents, usually declared in `@context` under the `toot` alias.

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule, Property};

/// Returns the `toot` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "toot",
            iri: NS_TOOT,
            label: "Mastodon extensions",
            comment: "Custom emoji, profile discovery flags, featured collections \
                      and image placeholders.",
            keyword: false,
        },
        classes: vec![Class {
            id: "http://joinmastodon.org/ns#Emoji",
            name: "Emoji",
            namespace: NS_TOOT,
            comment: "A custom emoji, referenced from `tag` and rendered inline.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        }],
        properties: vec![
            Property {
                id: "http://joinmastodon.org/ns#discoverable",
                name: "discoverable",
                namespace: NS_TOOT,
                comment: "Whether the actor consents to appearing in directories.",
                functional: true,
                domain: &["Person", "Service"],
                range: &[XSD_BOOLEAN],
                natural_language: false,
                iri_requires_scheme: true,
                collapse_single: true,
            },
            Property {
                id: "http://joinmastodon.org/ns#featured",
                name: "featured",
                namespace: NS_TOOT,
                comment: "The collection of objects the actor has pinned.",
                functional: true,
                domain: &["Person", "Service"],
                range: &["OrderedCollection"],
                natural_language: false,
                iri_requires_scheme: false,
                collapse_single: true,
            },
            Property {
                id: "http://joinmastodon.org/ns#blurhash",
                name: "blurhash",
                namespace: NS_TOOT,
                comment: "A compact placeholder rendering of an image.",
                functional: true,
                domain: &["Document"],
                range: &[XSD_STRING],
                natural_language: false,
                iri_requires_scheme: true,
                collapse_single: true,
            },
        ],
    }
}
