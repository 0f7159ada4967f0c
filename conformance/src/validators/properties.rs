//! Property declaration validator.
//!
//! - domains name known classes; ranges name known classes or datatypes
//! - natural-language properties declare `rdf:langString`, and only they do
//! - a property whose range admits a plain string but reads any string as
//!   an IRI reference is reported as a warning: its strings never reach the
//!   string kind
//! - `collapse_single` is only meaningful on non-functional properties

use std::collections::HashSet;

use asld_vocab::model::iris::{BCP47, DATATYPES, RDF_LANG_STRING, RFC2045, RFC5988, XSD_STRING};
use asld_vocab::Vocabulary;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocab/properties";

/// String-valued datatypes: any bare string could be read as one of them.
const STRING_KINDS: &[&str] = &[XSD_STRING, BCP47, RFC2045, RFC5988];

/// Validates every property declaration of the live vocabulary.
pub fn validate() -> ConformanceReport {
    let vocab = Vocabulary::full();
    let mut report = ConformanceReport::new();
    let classes: HashSet<&str> = vocab.classes().map(|c| c.name).collect();
    let datatypes: HashSet<&str> = DATATYPES.iter().copied().collect();

    let mut unknown = Vec::new();
    let mut language = Vec::new();
    let mut shadowed = Vec::new();
    let mut collapse = Vec::new();

    for prop in vocab.properties() {
        for class in prop.domain {
            if !classes.contains(class) {
                unknown.push(format!("{}: domain {class}", prop.id));
            }
        }
        for target in prop.range {
            if !classes.contains(target) && !datatypes.contains(target) {
                unknown.push(format!("{}: range {target}", prop.id));
            }
        }

        let declares_language = prop.range.contains(&RDF_LANG_STRING);
        if prop.natural_language != declares_language {
            language.push(format!(
                "{}: natural_language = {}, declares rdf:langString = {declares_language}",
                prop.id, prop.natural_language
            ));
        }

        let has_string_kind = prop.range.iter().any(|r| STRING_KINDS.contains(r));
        if has_string_kind && !prop.iri_requires_scheme {
            shadowed.push(prop.id.to_string());
        }

        if prop.functional && !prop.collapse_single {
            collapse.push(prop.id.to_string());
        }
    }

    report.push(TestResult::check(
        VALIDATOR,
        format!("All domains and ranges of {} properties are known", vocab.property_count()),
        "Properties reference unknown classes or datatypes",
        unknown,
    ));
    report.push(TestResult::check(
        VALIDATOR,
        "Natural-language flags match rdf:langString ranges",
        "Natural-language flags disagree with ranges",
        language,
    ));
    if shadowed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every string-valued property requires a scheme for IRI references",
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            "String-valued properties read any string as an IRI reference",
            shadowed,
        ));
    }
    if collapse.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Array preservation is only declared on non-functional properties",
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            "Functional properties declare array preservation, which has no effect",
            collapse,
        ));
    }

    report
}
