//! One Rust type per vocabulary type, and the [`Node`] sum over them.

use std::ops::{Deref, DerefMut};

use asld_vocab::Class;

use crate::catalog::{CatalogEntry, TypeCatalog};
use crate::error::{Error, Result};
use crate::record::TypeRecord;

/// A Rust type bound to one vocabulary type.
pub trait VocabularyType: Sized + Deref<Target = TypeRecord> + DerefMut {
    /// The vocabulary type's local name.
    const NAME: &'static str;

    /// The vocabulary type.
    #[must_use]
    fn class() -> &'static Class {
        binding_entry(Self::NAME).class()
    }

    /// Takes the value out of a node of this type; hands the node back
    /// otherwise.
    ///
    /// # Errors
    ///
    /// The original node, if it holds another type.
    fn from_node(node: Node) -> std::result::Result<Self, Node>;

    /// Borrows the value from a node of this type.
    fn from_node_ref(node: &Node) -> Option<&Self>;

    /// Wraps the value in a node.
    fn into_node(self) -> Node;

    /// Wraps a record of this type; hands the record back otherwise.
    ///
    /// # Errors
    ///
    /// The original record, if it is of another type.
    fn from_record(record: TypeRecord) -> std::result::Result<Self, TypeRecord>;

    /// Unwraps the record.
    fn into_record(self) -> TypeRecord;
}

// Every binding name is a vocabulary class; `bindings_cover_the_catalog`
// keeps the two in step.
#[allow(clippy::expect_used)]
fn binding_entry(name: &'static str) -> &'static CatalogEntry {
    TypeCatalog::global()
        .entry(name)
        .expect("binding names a cataloged type")
}

macro_rules! vocabulary_types {
    ($($ty:ident => $doc:literal,)+) => {
        $(
            #[doc = $doc]
            #[derive(Debug, Clone, PartialEq)]
            pub struct $ty(TypeRecord);

            impl $ty {
                /// An empty value, qualified under the default `@context`.
                #[must_use]
                pub fn new() -> Self {
                    Self(TypeRecord::from_entry(binding_entry(stringify!($ty))))
                }
            }

            impl Default for $ty {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl Deref for $ty {
                type Target = TypeRecord;

                fn deref(&self) -> &TypeRecord {
                    &self.0
                }
            }

            impl DerefMut for $ty {
                fn deref_mut(&mut self) -> &mut TypeRecord {
                    &mut self.0
                }
            }

            impl VocabularyType for $ty {
                const NAME: &'static str = stringify!($ty);

                fn from_node(node: Node) -> std::result::Result<Self, Node> {
                    match node {
                        Node::$ty(value) => Ok(value),
                        other => Err(other),
                    }
                }

                fn from_node_ref(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$ty(value) => Some(value),
                        _ => None,
                    }
                }

                fn into_node(self) -> Node {
                    Node::$ty(self)
                }

                fn from_record(record: TypeRecord) -> std::result::Result<Self, TypeRecord> {
                    if record.type_name() == Self::NAME {
                        Ok(Self(record))
                    } else {
                        Err(record)
                    }
                }

                fn into_record(self) -> TypeRecord {
                    self.0
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Node {
                    Node::$ty(value)
                }
            }
        )+

        /// A document of any known type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Node {
            $(
                #[doc = $doc]
                $ty($ty),
            )+
        }

        impl Node {
            /// The vocabulary type's local name.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Node::$ty(_) => stringify!($ty),)+
                }
            }

            /// The underlying record.
            #[must_use]
            pub fn record(&self) -> &TypeRecord {
                match self {
                    $(Node::$ty(value) => &value.0,)+
                }
            }

            /// Mutable access to the underlying record.
            pub fn record_mut(&mut self) -> &mut TypeRecord {
                match self {
                    $(Node::$ty(value) => &mut value.0,)+
                }
            }

            /// Unwraps the underlying record.
            #[must_use]
            pub fn into_record(self) -> TypeRecord {
                match self {
                    $(Node::$ty(value) => value.0,)+
                }
            }
        }

        impl TryFrom<TypeRecord> for Node {
            type Error = Error;

            fn try_from(record: TypeRecord) -> Result<Node> {
                match record.type_name() {
                    $(stringify!($ty) => Ok(Node::$ty($ty(record))),)+
                    other => Err(Error::UnrecognizedType(other.to_string())),
                }
            }
        }

        /// Local names of every type a [`Node`] can hold.
        pub const TYPE_NAMES: &[&str] = &[$(stringify!($ty),)+];
    };
}

vocabulary_types! {
    Object => "An object of any kind.",
    Link => "A qualified reference to a resource.",
    Mention => "A reference to an entity, such as a user.",
    Activity => "An action performed by an actor.",
    IntransitiveActivity => "An activity with no object.",
    Question => "A question or poll.",
    Create => "The actor created the object.",
    Update => "The actor updated the object.",
    Delete => "The actor deleted the object.",
    Follow => "The actor is following the object.",
    Accept => "The actor accepts the object.",
    Reject => "The actor rejects the object.",
    Like => "The actor likes the object.",
    Announce => "The actor is calling the target's attention to the object.",
    Collection => "An unordered set of items.",
    OrderedCollection => "An ordered set of items.",
    Note => "A short written work.",
    Article => "A multi-paragraph written work.",
    Document => "A document of any kind.",
    Image => "An image document.",
    Person => "An individual person.",
    Service => "A service of any kind.",
    Place => "A logical or physical location.",
    Tombstone => "A placeholder for a deleted object.",
    Emoji => "A custom emoji (Mastodon extension).",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_cover_the_catalog() {
        let catalog = TypeCatalog::global();
        let cataloged: Vec<_> = catalog.classes().map(|c| c.name).collect();
        assert_eq!(TYPE_NAMES, cataloged.as_slice());
    }

    #[test]
    fn bindings_know_their_class() {
        assert_eq!(Emoji::class().namespace, asld_vocab::model::iris::NS_TOOT);
        assert_eq!(Note::class().name, Note::NAME);
    }

    #[test]
    fn nodes_convert_both_ways() {
        let note = Note::new();
        let node = note.into_node();
        assert_eq!(node.type_name(), "Note");
        assert!(Note::from_node_ref(&node).is_some());
        let node = match Article::from_node(node) {
            Ok(_) => panic!("a Note is not an Article"),
            Err(node) => node,
        };
        assert!(Note::from_node(node).is_ok());
    }

    #[test]
    fn records_become_nodes_by_type_name() {
        let record = TypeRecord::new("Person").unwrap();
        let node = Node::try_from(record).unwrap();
        assert!(matches!(node, Node::Person(_)));
        let record = node.into_record();
        assert!(Note::from_record(record.clone()).is_err());
        assert!(Person::from_record(record).is_ok());
    }

    #[test]
    fn bindings_deref_to_their_record() {
        let mut image = Image::new();
        image
            .value_mut("id")
            .unwrap()
            .set_iri(crate::Iri::parse("https://example.com/i.png").unwrap());
        assert_eq!(image.type_name(), "Image");
        assert!(image.id().is_some());
        assert!(image.is_extending("Document"));
    }
}
