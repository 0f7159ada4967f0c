//! JSON-LD serializer for the vocabulary.
//!
//! Produces a single JSON-LD document containing the `@context` and a
//! `@graph` array with every namespace, class and property, plus the default
//! `@context` value that documents without one are emitted with.

use serde_json::{json, Map, Value};

use crate::model::{Class, Property, Vocabulary};

/// Serializes the complete vocabulary to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(vocab: &Vocabulary) -> Value {
    json!({
        "@context": build_context(vocab),
        "@graph": build_graph(vocab)
    })
}

/// The `@context` value attached to documents that were authored in memory
/// and carry no context of their own.
///
/// The ActivityStreams namespace is the default vocabulary (a bare string);
/// every other namespace is declared under its conventional prefix.
#[must_use]
pub fn default_context(vocab: &Vocabulary) -> Value {
    let mut entries = vec![json!(crate::model::iris::NS_AS)];
    let mut aliases = Map::new();
    for module in &vocab.namespaces {
        let ns = &module.namespace;
        if ns.keyword || ns.iri == crate::model::iris::NS_AS {
            continue;
        }
        aliases.insert(ns.prefix.to_owned(), json!(ns.iri));
    }
    if !aliases.is_empty() {
        entries.push(Value::Object(aliases));
    }
    Value::Array(entries)
}

fn build_context(vocab: &Vocabulary) -> Value {
    let mut ctx = Map::new();
    // Standard semantic web prefixes
    ctx.insert("owl".to_owned(), json!(crate::model::iris::OWL));
    ctx.insert("rdf".to_owned(), json!(crate::model::iris::RDF));
    ctx.insert("rdfs".to_owned(), json!(crate::model::iris::RDFS));
    ctx.insert("xsd".to_owned(), json!(crate::model::iris::XSD));
    // Vocabulary namespace prefixes
    for module in &vocab.namespaces {
        if module.namespace.keyword {
            continue;
        }
        ctx.insert(module.namespace.prefix.to_owned(), json!(module.namespace.iri));
    }
    Value::Object(ctx)
}

fn build_graph(vocab: &Vocabulary) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    for module in &vocab.namespaces {
        let ns = &module.namespace;
        if !ns.keyword {
            nodes.push(json!({
                "@id": ns.iri,
                "@type": "owl:Ontology",
                "rdfs:label": ns.label,
                "rdfs:comment": ns.comment
            }));
        }

        for class in &module.classes {
            nodes.push(class_to_json(vocab, class));
        }

        for prop in &module.properties {
            nodes.push(property_to_json(vocab, prop));
        }
    }

    Value::Array(nodes)
}

/// Expands a class name to its full IRI. Unknown names pass through.
fn class_iri<'a>(vocab: &'a Vocabulary, name: &'a str) -> &'a str {
    vocab.find_class(name).map_or(name, |c| c.id)
}

fn id_refs(vocab: &Vocabulary, names: &[&str]) -> Vec<Value> {
    names
        .iter()
        .map(|name| json!({ "@id": class_iri(vocab, name) }))
        .collect()
}

fn class_to_json(vocab: &Vocabulary, class: &Class) -> Value {
    let mut node = json!({
        "@id": class.id,
        "@type": "owl:Class",
        "rdfs:label": class.name,
        "rdfs:comment": class.comment,
        "rdfs:subClassOf": id_refs(vocab, class.subclass_of)
    });
    if !class.disjoint_with.is_empty() {
        node["owl:disjointWith"] = Value::Array(id_refs(vocab, class.disjoint_with));
    }
    node
}

fn property_to_json(vocab: &Vocabulary, prop: &Property) -> Value {
    let type_ = if prop.functional {
        json!(["rdf:Property", "owl:FunctionalProperty"])
    } else {
        json!("rdf:Property")
    };
    // Datatype IRIs are not class names, so they pass through unchanged.
    let range = id_refs(vocab, prop.range);
    let domain = id_refs(vocab, prop.domain);

    let mut node = json!({
        "@id": prop.id,
        "@type": type_,
        "rdfs:label": prop.name,
        "rdfs:comment": prop.comment,
        "rdfs:domain": domain,
        "rdfs:range": range
    });
    if let Some(map_name) = prop.map_name() {
        node["rdfs:seeAlso"] = json!(map_name);
    }
    node
}
