//! JSON-LD keyword terms.
//!
//! `id` and `type` are shared by every class. They belong to no vocabulary
//! namespace, so documents never prefix them with an alias.

use crate::model::iris::*;
use crate::model::{Namespace, NamespaceModule, Property};

/// Returns the JSON-LD keyword module. It declares properties only.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "",
            iri: NS_JSONLD,
            label: "JSON-LD keywords",
            comment: "Node identifier and type discriminator.",
            keyword: true,
        },
        classes: vec![],
        properties: vec![
            Property {
                id: "@id",
                name: "id",
                namespace: NS_JSONLD,
                comment: "The globally unique identifier of a node.",
                functional: true,
                domain: &["Object", "Link"],
                range: &[XSD_ANY_URI],
                natural_language: false,
                // Relative identifiers are still references.
                iri_requires_scheme: false,
                collapse_single: true,
            },
            Property {
                id: "@type",
                name: "type",
                namespace: NS_JSONLD,
                comment: "The type discriminator. A bare name is a lexical value; \
                          only a string with a scheme is an IRI.",
                functional: false,
                domain: &["Object", "Link"],
                range: &[XSD_ANY_URI, XSD_STRING],
                natural_language: false,
                iri_requires_scheme: true,
                collapse_single: true,
            },
        ],
    }
}
