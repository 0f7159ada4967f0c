//! ActivityStreams 2.0 namespace.
//!
//! The core and extended ActivityStreams types an application exchanges:
//! objects, links, activities, collections, actors, and places. Every
//! object type is disjoint with `Link` and `Mention`.

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule, Property};

/// Returns the ActivityStreams namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "as",
            iri: NS_AS,
            label: "ActivityStreams 2.0",
            comment: "Vocabulary for describing activities, the actors that perform \
                      them, and the objects they act upon.",
            keyword: false,
        },
        classes: classes(),
        properties: properties(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: "https://www.w3.org/ns/activitystreams#Object",
            name: "Object",
            namespace: NS_AS,
            comment: "Describes an object of any kind. The base of every non-link type.",
            subclass_of: &[],
            extends: &[],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[
                "Activity",
                "IntransitiveActivity",
                "Question",
                "Create",
                "Update",
                "Delete",
                "Follow",
                "Accept",
                "Reject",
                "Like",
                "Announce",
                "Collection",
                "OrderedCollection",
                "Note",
                "Article",
                "Document",
                "Image",
                "Person",
                "Service",
                "Place",
                "Tombstone",
                "Emoji",
            ],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Link",
            name: "Link",
            namespace: NS_AS,
            comment: "A qualified, indirect reference to a resource identified by a URL.",
            subclass_of: &[],
            extends: &[],
            disjoint_with: &[
                "Object",
                "Activity",
                "IntransitiveActivity",
                "Question",
                "Create",
                "Update",
                "Delete",
                "Follow",
                "Accept",
                "Reject",
                "Like",
                "Announce",
                "Collection",
                "OrderedCollection",
                "Note",
                "Article",
                "Document",
                "Image",
                "Person",
                "Service",
                "Place",
                "Tombstone",
                "Emoji",
            ],
            extended_by: &["Mention"],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Mention",
            name: "Mention",
            namespace: NS_AS,
            comment: "A specialized Link that represents an @mention.",
            subclass_of: &["Link"],
            extends: &["Link"],
            disjoint_with: &[
                "Object",
                "Activity",
                "IntransitiveActivity",
                "Question",
                "Create",
                "Update",
                "Delete",
                "Follow",
                "Accept",
                "Reject",
                "Like",
                "Announce",
                "Collection",
                "OrderedCollection",
                "Note",
                "Article",
                "Document",
                "Image",
                "Person",
                "Service",
                "Place",
                "Tombstone",
                "Emoji",
            ],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Activity",
            name: "Activity",
            namespace: NS_AS,
            comment: "An action taken by an actor on an object, optionally with a target.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[
                "IntransitiveActivity",
                "Question",
                "Create",
                "Update",
                "Delete",
                "Follow",
                "Accept",
                "Reject",
                "Like",
                "Announce",
            ],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#IntransitiveActivity",
            name: "IntransitiveActivity",
            namespace: NS_AS,
            comment: "An Activity that does not have an object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &["Question"],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Question",
            name: "Question",
            namespace: NS_AS,
            comment: "A question being asked, answerable with oneOf or anyOf choices.",
            subclass_of: &["IntransitiveActivity"],
            extends: &["IntransitiveActivity", "Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Create",
            name: "Create",
            namespace: NS_AS,
            comment: "The actor has created the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Update",
            name: "Update",
            namespace: NS_AS,
            comment: "The actor has updated the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Delete",
            name: "Delete",
            namespace: NS_AS,
            comment: "The actor has deleted the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Follow",
            name: "Follow",
            namespace: NS_AS,
            comment: "The actor is following the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Accept",
            name: "Accept",
            namespace: NS_AS,
            comment: "The actor accepts the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Reject",
            name: "Reject",
            namespace: NS_AS,
            comment: "The actor rejects the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Like",
            name: "Like",
            namespace: NS_AS,
            comment: "The actor likes, recommends or endorses the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Announce",
            name: "Announce",
            namespace: NS_AS,
            comment: "The actor is calling the target's attention to the object.",
            subclass_of: &["Activity"],
            extends: &["Activity", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Collection",
            name: "Collection",
            namespace: NS_AS,
            comment: "An ordered or unordered set of Object or Link instances.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &["OrderedCollection"],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#OrderedCollection",
            name: "OrderedCollection",
            namespace: NS_AS,
            comment: "A Collection whose items are strictly ordered.",
            subclass_of: &["Collection"],
            extends: &["Collection", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Note",
            name: "Note",
            namespace: NS_AS,
            comment: "A short written work, typically less than a single paragraph.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Article",
            name: "Article",
            namespace: NS_AS,
            comment: "Any kind of multi-paragraph written work.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Document",
            name: "Document",
            namespace: NS_AS,
            comment: "A document of any kind.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &["Image"],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Image",
            name: "Image",
            namespace: NS_AS,
            comment: "An image document of any kind.",
            subclass_of: &["Document"],
            extends: &["Document", "Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Person",
            name: "Person",
            namespace: NS_AS,
            comment: "Represents an individual person.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Service",
            name: "Service",
            namespace: NS_AS,
            comment: "Represents a service of any kind.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Place",
            name: "Place",
            namespace: NS_AS,
            comment: "Represents a logical or physical location.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
        Class {
            id: "https://www.w3.org/ns/activitystreams#Tombstone",
            name: "Tombstone",
            namespace: NS_AS,
            comment: "A placeholder for content that has been deleted.",
            subclass_of: &["Object"],
            extends: &["Object"],
            disjoint_with: &["Link", "Mention"],
            extended_by: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://www.w3.org/ns/activitystreams#attachment",
            name: "attachment",
            namespace: NS_AS,
            comment: "Resources attached or related to an object that potentially require \
                      special handling.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#attributedTo",
            name: "attributedTo",
            namespace: NS_AS,
            comment: "Entities to which this object is attributed.",
            functional: false,
            domain: &["Object", "Link"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#audience",
            name: "audience",
            namespace: NS_AS,
            comment: "Entities considered to be the total population of entities for which the \
                      object can be considered relevant.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#bcc",
            name: "bcc",
            namespace: NS_AS,
            comment: "Entities that are part of the private secondary audience of this object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#bto",
            name: "bto",
            namespace: NS_AS,
            comment: "Entities that are part of the private primary audience of this object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#cc",
            name: "cc",
            namespace: NS_AS,
            comment: "Entities that are part of the public secondary audience of this object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#content",
            name: "content",
            namespace: NS_AS,
            comment: "The content or textual representation of the object.",
            functional: false,
            domain: &["Object"],
            range: &[XSD_STRING, RDF_LANG_STRING],
            natural_language: true,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#context",
            name: "context",
            namespace: NS_AS,
            comment: "The context within which the object exists or an activity was performed.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#duration",
            name: "duration",
            namespace: NS_AS,
            comment: "The approximate duration of a time-bound resource.",
            functional: true,
            domain: &["Object"],
            range: &[XSD_DURATION],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#endTime",
            name: "endTime",
            namespace: NS_AS,
            comment: "The date and time describing the actual or expected ending time of the \
                      object.",
            functional: true,
            domain: &["Object"],
            range: &[XSD_DATETIME],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#generator",
            name: "generator",
            namespace: NS_AS,
            comment: "The entity that generated the object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#height",
            name: "height",
            namespace: NS_AS,
            comment: "The display height of a linked resource, in device-independent pixels.",
            functional: true,
            domain: &["Link"],
            range: &[XSD_NON_NEGATIVE_INTEGER],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#href",
            name: "href",
            namespace: NS_AS,
            comment: "The target resource pointed to by a Link.",
            functional: true,
            domain: &["Link"],
            range: &[XSD_ANY_URI],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#hreflang",
            name: "hreflang",
            namespace: NS_AS,
            comment: "The language of a linked resource.",
            functional: true,
            domain: &["Link"],
            range: &[BCP47],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#icon",
            name: "icon",
            namespace: NS_AS,
            comment: "An icon for the object, typically square with a 1:1 aspect ratio.",
            functional: false,
            domain: &["Object"],
            range: &["Image", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#image",
            name: "image",
            namespace: NS_AS,
            comment: "An image document of any kind.",
            functional: false,
            domain: &["Object"],
            range: &["Image", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#inReplyTo",
            name: "inReplyTo",
            namespace: NS_AS,
            comment: "Entities for which this object is considered a response.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#likes",
            name: "likes",
            namespace: NS_AS,
            comment: "A Collection of Like activities that have this object as their object.",
            functional: true,
            domain: &["Object"],
            range: &["Collection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#location",
            name: "location",
            namespace: NS_AS,
            comment: "Physical or logical locations associated with the object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#mediaType",
            name: "mediaType",
            namespace: NS_AS,
            comment: "The MIME media type of the referenced resource.",
            functional: true,
            domain: &["Object", "Link"],
            range: &[RFC2045],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#name",
            name: "name",
            namespace: NS_AS,
            comment: "A simple, human-readable, plain-text name for the object.",
            functional: false,
            domain: &["Object", "Link"],
            range: &[XSD_STRING, RDF_LANG_STRING],
            natural_language: true,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#preview",
            name: "preview",
            namespace: NS_AS,
            comment: "An entity that provides a preview of this object.",
            functional: false,
            domain: &["Object", "Link"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#published",
            name: "published",
            namespace: NS_AS,
            comment: "The date and time at which the object was published.",
            functional: true,
            domain: &["Object"],
            range: &[XSD_DATETIME],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#rel",
            name: "rel",
            namespace: NS_AS,
            comment: "The link relation(s) of a Link.",
            functional: false,
            domain: &["Link"],
            range: &[RFC5988],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#replies",
            name: "replies",
            namespace: NS_AS,
            comment: "A Collection of objects that are considered responses to this object.",
            functional: true,
            domain: &["Object"],
            range: &["Collection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#sensitive",
            name: "sensitive",
            namespace: NS_AS,
            comment: "Whether the content should be hidden behind a warning by default.",
            functional: true,
            domain: &["Object"],
            range: &[XSD_BOOLEAN],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#shares",
            name: "shares",
            namespace: NS_AS,
            comment: "A Collection of Announce activities that have this object as their object.",
            functional: true,
            domain: &["Object"],
            range: &["Collection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#startTime",
            name: "startTime",
            namespace: NS_AS,
            comment: "The date and time describing the actual or expected starting time of the \
                      object.",
            functional: true,
            domain: &["Object"],
            range: &[XSD_DATETIME],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#summary",
            name: "summary",
            namespace: NS_AS,
            comment: "A natural language summarization of the object.",
            functional: false,
            domain: &["Object"],
            range: &[XSD_STRING, RDF_LANG_STRING],
            natural_language: true,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#tag",
            name: "tag",
            namespace: NS_AS,
            comment: "One or more tags that have been associated with the object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#to",
            name: "to",
            namespace: NS_AS,
            comment: "Entities that are part of the public primary audience of this object.",
            functional: false,
            domain: &["Object"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#updated",
            name: "updated",
            namespace: NS_AS,
            comment: "The date and time at which the object was updated.",
            functional: true,
            domain: &["Object"],
            range: &[XSD_DATETIME],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#url",
            name: "url",
            namespace: NS_AS,
            comment: "Links to representations of the object.",
            functional: false,
            domain: &["Object"],
            range: &[XSD_ANY_URI, "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#width",
            name: "width",
            namespace: NS_AS,
            comment: "The display width of a linked resource, in device-independent pixels.",
            functional: true,
            domain: &["Link"],
            range: &[XSD_NON_NEGATIVE_INTEGER],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#actor",
            name: "actor",
            namespace: NS_AS,
            comment: "The entities that performed the activity.",
            functional: false,
            domain: &["Activity"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#object",
            name: "object",
            namespace: NS_AS,
            comment: "The direct object of the activity.",
            functional: false,
            domain: &["Activity"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#target",
            name: "target",
            namespace: NS_AS,
            comment: "The indirect object, or target, of the activity.",
            functional: false,
            domain: &["Activity"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#result",
            name: "result",
            namespace: NS_AS,
            comment: "The result of the activity.",
            functional: false,
            domain: &["Activity"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#origin",
            name: "origin",
            namespace: NS_AS,
            comment: "The indirect object from which the activity is directed.",
            functional: false,
            domain: &["Activity"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#instrument",
            name: "instrument",
            namespace: NS_AS,
            comment: "Objects used or to be used in the completion of the activity.",
            functional: false,
            domain: &["Activity"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#oneOf",
            name: "oneOf",
            namespace: NS_AS,
            comment: "An exclusive option for a Question.",
            functional: false,
            domain: &["Question"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#anyOf",
            name: "anyOf",
            namespace: NS_AS,
            comment: "An inclusive option for a Question.",
            functional: false,
            domain: &["Question"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#closed",
            name: "closed",
            namespace: NS_AS,
            comment: "Indicates that a question has been closed, and answers are no longer \
                      accepted.",
            functional: false,
            domain: &["Question"],
            range: &["Object", "Link", XSD_DATETIME, XSD_BOOLEAN],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#totalItems",
            name: "totalItems",
            namespace: NS_AS,
            comment: "The total number of items in a logical view of the collection.",
            functional: true,
            domain: &["Collection"],
            range: &[XSD_NON_NEGATIVE_INTEGER],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#current",
            name: "current",
            namespace: NS_AS,
            comment: "The most recently updated page of items in the collection.",
            functional: true,
            domain: &["Collection"],
            range: &["Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#first",
            name: "first",
            namespace: NS_AS,
            comment: "The furthest preceding page of items in the collection.",
            functional: true,
            domain: &["Collection"],
            range: &["Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#last",
            name: "last",
            namespace: NS_AS,
            comment: "The furthest proceeding page of items in the collection.",
            functional: true,
            domain: &["Collection"],
            range: &["Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#items",
            name: "items",
            namespace: NS_AS,
            comment: "The items contained in a collection.",
            functional: false,
            domain: &["Collection"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: false,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#orderedItems",
            name: "orderedItems",
            namespace: NS_AS,
            comment: "The items contained in an ordered collection, in order.",
            functional: false,
            domain: &["OrderedCollection"],
            range: &["Object", "Link"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: false,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#accuracy",
            name: "accuracy",
            namespace: NS_AS,
            comment: "The accuracy of position coordinates on a Place, in percent.",
            functional: true,
            domain: &["Place"],
            range: &[XSD_FLOAT],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#altitude",
            name: "altitude",
            namespace: NS_AS,
            comment: "The altitude of a place.",
            functional: true,
            domain: &["Place"],
            range: &[XSD_FLOAT],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#latitude",
            name: "latitude",
            namespace: NS_AS,
            comment: "The latitude of a place.",
            functional: true,
            domain: &["Place"],
            range: &[XSD_FLOAT],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#longitude",
            name: "longitude",
            namespace: NS_AS,
            comment: "The longitude of a place.",
            functional: true,
            domain: &["Place"],
            range: &[XSD_FLOAT],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#radius",
            name: "radius",
            namespace: NS_AS,
            comment: "The radius from the given latitude and longitude for a Place.",
            functional: true,
            domain: &["Place"],
            range: &[XSD_FLOAT],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#units",
            name: "units",
            namespace: NS_AS,
            comment: "The measurement units for the radius and altitude properties on a Place.",
            functional: true,
            domain: &["Place"],
            range: &[XSD_STRING, XSD_ANY_URI],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#formerType",
            name: "formerType",
            namespace: NS_AS,
            comment: "The type of the object that was deleted.",
            functional: false,
            domain: &["Tombstone"],
            range: &[XSD_STRING],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#deleted",
            name: "deleted",
            namespace: NS_AS,
            comment: "The date and time the object was deleted.",
            functional: true,
            domain: &["Tombstone"],
            range: &[XSD_DATETIME],
            natural_language: false,
            iri_requires_scheme: true,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#inbox",
            name: "inbox",
            namespace: NS_AS,
            comment: "The inbox of an actor.",
            functional: true,
            domain: &["Person", "Service"],
            range: &["OrderedCollection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#outbox",
            name: "outbox",
            namespace: NS_AS,
            comment: "The outbox of an actor.",
            functional: true,
            domain: &["Person", "Service"],
            range: &["OrderedCollection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#followers",
            name: "followers",
            namespace: NS_AS,
            comment: "The collection of actors following this actor.",
            functional: true,
            domain: &["Person", "Service"],
            range: &["Collection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#following",
            name: "following",
            namespace: NS_AS,
            comment: "The collection of actors this actor follows.",
            functional: true,
            domain: &["Person", "Service"],
            range: &["Collection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#liked",
            name: "liked",
            namespace: NS_AS,
            comment: "The collection of objects this actor has liked.",
            functional: true,
            domain: &["Person", "Service"],
            range: &["Collection"],
            natural_language: false,
            iri_requires_scheme: false,
            collapse_single: true,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#preferredUsername",
            name: "preferredUsername",
            namespace: NS_AS,
            comment: "A short username which may be used to refer to the actor.",
            functional: true,
            domain: &["Person", "Service"],
            range: &[XSD_STRING, RDF_LANG_STRING],
            natural_language: true,
            iri_requires_scheme: true,
            collapse_single: true,
        },
    ]
}
