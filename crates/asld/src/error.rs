//! Error taxonomy shared by decoding, mutation and dispatch.

/// Every failure the engine reports.
///
/// Three variants form the "unmatched" class ([`Error::is_unmatched`]): the
/// resolver simply had no handler for the value and the caller may try a
/// different strategy. The assertion variants mean a producer broke a
/// contract the engine had already relied on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The discriminator names no type in the closed type set.
    #[error("unrecognized type: {0}")]
    UnrecognizedType(String),

    /// A required key is missing, or (in strict mode) a property value
    /// matches none of its declared kinds.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A deserializer was handed a document of a different type.
    #[error("\"type\" is not {expected}: {found}")]
    TypeMismatch {
        /// The type the deserializer builds.
        expected: &'static str,
        /// The discriminator that was found.
        found: String,
    },

    /// The resolver knows the type but no callback accepts it.
    #[error("no callback matches type {0}")]
    NoCallbackMatch(String),

    /// The resolver has no handling for the type at all.
    #[error("unhandled type: {0}")]
    UnhandledType(String),

    /// The predicate's signature does not accept the value's type.
    #[error("predicate does not accept type {0}")]
    PredicateUnmatched(String),

    /// A callback matched by signature but the value could not be converted.
    #[error("cannot assert {found} as {expected}")]
    CannotAssertType {
        /// The type named by the callback's signature.
        expected: String,
        /// The concrete type of the value.
        found: String,
    },

    /// A predicate matched by signature but the value could not be converted.
    #[error("cannot assert {found} as {expected} for predicate")]
    CannotAssertPredicate {
        /// The type named by the predicate's signature.
        expected: String,
        /// The concrete type of the value.
        found: String,
    },

    /// A resolver was built with a callback or predicate that can never be
    /// invoked.
    #[error("resolver construction failed: {0}")]
    Construction(String),

    /// List access or mutation outside `[0, len)`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the request.
        len: usize,
    },

    /// A value was assigned a kind its property does not declare.
    #[error("property {property} does not declare kind {kind}")]
    KindNotDeclared {
        /// The property's local name.
        property: &'static str,
        /// The rejected kind.
        kind: String,
    },

    /// The type has no property with this name.
    #[error("type {class} does not declare property {property}")]
    PropertyNotDeclared {
        /// The record's type name.
        class: &'static str,
        /// The requested property name.
        property: String,
    },

    /// Functional access to a non-functional property, or the reverse.
    #[error("property {property} is {arity}")]
    Arity {
        /// The property's local name.
        property: &'static str,
        /// `"functional"` or `"non-functional"`.
        arity: &'static str,
    },

    /// An `xsd:float` was NaN or infinite, which JSON cannot represent.
    #[error("property {property} cannot hold a non-finite float")]
    NonFiniteFloat {
        /// The property's local name.
        property: &'static str,
    },

    /// Text could not be parsed as, or written to, JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the expected, recoverable "nothing matched" class:
    /// [`Error::NoCallbackMatch`], [`Error::UnhandledType`] and
    /// [`Error::PredicateUnmatched`].
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        matches!(
            self,
            Error::NoCallbackMatch(_) | Error::UnhandledType(_) | Error::PredicateUnmatched(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_class_is_exact() {
        assert!(Error::NoCallbackMatch("Note".into()).is_unmatched());
        assert!(Error::UnhandledType("Banana".into()).is_unmatched());
        assert!(Error::PredicateUnmatched("Note".into()).is_unmatched());

        assert!(!Error::UnrecognizedType("Banana".into()).is_unmatched());
        assert!(!Error::CannotAssertType {
            expected: "Note".into(),
            found: "Article".into()
        }
        .is_unmatched());
        assert!(!Error::Construction("bad".into()).is_unmatched());
        assert!(!Error::IndexOutOfRange { index: 3, len: 1 }.is_unmatched());
        assert!(!Error::NonFiniteFloat { property: "latitude" }.is_unmatched());
    }

    #[test]
    fn messages_name_the_offender() {
        let err = Error::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for list of length 2");
        let err = Error::TypeMismatch {
            expected: "Note",
            found: "Article".into(),
        };
        assert_eq!(err.to_string(), "\"type\" is not Note: Article");
    }
}
