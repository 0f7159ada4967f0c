//! ActivityStreams vocabulary encoded as typed Rust data.
//!
//! The `asld-vocab` crate provides the vocabulary the `asld` engine decodes
//! against: 3 namespaces (JSON-LD keywords, ActivityStreams, the Mastodon
//! `toot` extension), 25 classes and 68 properties, as static Rust data,
//! along with a serializer that produces the vocabulary and its default
//! `@context` as JSON-LD.
//!
//! # Entry Point
//!
//! ```
//! let vocab = asld_vocab::Vocabulary::full();
//! assert_eq!(vocab.namespaces.len(), 3);
//! assert!(vocab.find_class("Note").is_some());
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocab = asld_vocab::Vocabulary::full();
//! let json_ld = asld_vocab::serializer::jsonld::to_json_ld(vocab);
//! let context = asld_vocab::serializer::jsonld::default_context(vocab);
//! assert!(json_ld["@graph"].is_array());
//! assert!(context.is_array());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use model::{Class, Namespace, NamespaceModule, Property, Vocabulary};

impl Vocabulary {
    /// Returns the complete vocabulary.
    ///
    /// Assembly order: `keywords -> activitystreams -> toot`. Property
    /// declaration order across this sequence is the fixed order in which
    /// records compare and serialize their properties.
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            version: "2.0.0",
            namespaces: vec![
                namespaces::keywords::module(),
                namespaces::activitystreams::module(),
                namespaces::toot::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_count() {
        assert_eq!(Vocabulary::full().namespaces.len(), 3);
    }

    #[test]
    fn class_count() {
        // 24 ActivityStreams classes + toot:Emoji.
        assert_eq!(Vocabulary::full().class_count(), 25);
    }

    #[test]
    fn property_count() {
        // 2 keywords + 63 ActivityStreams + 3 toot.
        assert_eq!(Vocabulary::full().property_count(), 68);
    }

    #[test]
    fn all_class_names_unique() {
        let mut names = std::collections::HashSet::new();
        for class in Vocabulary::full().classes() {
            assert!(names.insert(class.name), "Duplicate class name: {}", class.name);
        }
    }

    #[test]
    fn all_property_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for prop in Vocabulary::full().properties() {
            assert!(iris.insert(prop.id), "Duplicate property IRI: {}", prop.id);
        }
    }

    #[test]
    fn natural_language_properties_have_map_names() {
        let vocab = Vocabulary::full();
        let content = vocab
            .find_property(model::iris::NS_AS, "content")
            .map(Property::map_name);
        assert_eq!(content, Some(Some("contentMap".to_string())));
        let actor = vocab
            .find_property(model::iris::NS_AS, "actor")
            .map(Property::map_name);
        assert_eq!(actor, Some(None));
    }

    #[test]
    fn declared_properties_exclude_inherited_ones() {
        let vocab = Vocabulary::full();
        let place = vocab.find_class("Place").map(|c| {
            vocab
                .declared_properties(c)
                .map(|p| p.name)
                .collect::<Vec<_>>()
        });
        assert_eq!(
            place,
            Some(vec!["accuracy", "altitude", "latitude", "longitude", "radius", "units"])
        );
    }

    #[test]
    fn extended_by_mirrors_extends() {
        let vocab = Vocabulary::full();
        for class in vocab.classes() {
            for ancestor in class.extends {
                let parent = vocab.find_class(ancestor);
                assert!(
                    parent.is_some_and(|p| p.extended_by.contains(&class.name)),
                    "{} extends {} but is not listed as its descendant",
                    class.name,
                    ancestor
                );
            }
        }
    }
}
