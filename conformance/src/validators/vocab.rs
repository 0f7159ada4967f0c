//! Vocabulary catalog validator.
//!
//! Checks the class relations authored in `asld-vocab`:
//! - every `subclass_of` / `extends` / `disjoint_with` / `extended_by` target is a known class
//! - direct parents are listed among the ancestors
//! - disjointness is symmetric
//! - `extended_by` is the exact inverse of `extends`
//! - no class is both a descendant of and disjoint with another
//!
//! It then checks that the engine's catalog agrees: every class is
//! cataloged and satisfies the capability of each of its ancestors.

use std::collections::HashSet;

use asld::TypeCatalog;
use asld_vocab::{Class, Vocabulary};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocab/catalog";

/// Validates the class relations of the live vocabulary.
pub fn validate() -> ConformanceReport {
    let vocab = Vocabulary::full();
    let mut report = ConformanceReport::new();

    let known: HashSet<&str> = vocab.classes().map(|c| c.name).collect();

    let mut unknown = Vec::new();
    for class in vocab.classes() {
        for (relation, targets) in relations(class) {
            for target in targets {
                if !known.contains(target) {
                    unknown.push(format!("{} {relation} {target}", class.name));
                }
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        format!("All relation targets of {} classes are known", known.len()),
        "Relations name unknown classes",
        unknown,
    ));

    let missing_parents = collect(vocab, |class, out| {
        for parent in class.subclass_of {
            if !class.extends.contains(parent) {
                out.push(format!("{} does not list direct parent {parent}", class.name));
            }
        }
    });
    report.push(TestResult::check(
        VALIDATOR,
        "Direct parents are listed among ancestors",
        "Direct parents missing from ancestors",
        missing_parents,
    ));

    let asymmetric = collect(vocab, |class, out| {
        for other in class.disjoint_with {
            let mirrored = vocab
                .find_class(other)
                .is_some_and(|o| o.disjoint_with.contains(&class.name));
            if !mirrored {
                out.push(format!("{} is disjoint with {other}, but not the reverse", class.name));
            }
        }
    });
    report.push(TestResult::check(
        VALIDATOR,
        "Disjointness is symmetric",
        "Disjointness is not symmetric",
        asymmetric,
    ));

    let not_inverse = collect(vocab, |class, out| {
        for ancestor in class.extends {
            let listed = vocab
                .find_class(ancestor)
                .is_some_and(|a| a.extended_by.contains(&class.name));
            if !listed {
                out.push(format!("{} extends {ancestor}, which does not list it", class.name));
            }
        }
        for descendant in class.extended_by {
            let listed = vocab
                .find_class(descendant)
                .is_some_and(|d| d.extends.contains(&class.name));
            if !listed {
                out.push(format!("{} lists {descendant}, which does not extend it", class.name));
            }
        }
    });
    report.push(TestResult::check(
        VALIDATOR,
        "extended_by is the inverse of extends",
        "extended_by and extends disagree",
        not_inverse,
    ));

    let contradictory = collect(vocab, |class, out| {
        for other in class.disjoint_with {
            if class.extends.contains(other) || class.extended_by.contains(other) || *other == class.name {
                out.push(format!("{} is both related to and disjoint with {other}", class.name));
            }
        }
    });
    report.push(TestResult::check(
        VALIDATOR,
        "No class is disjoint with a relative",
        "Classes are disjoint with their relatives",
        contradictory,
    ));

    validate_catalog(vocab, &mut report);
    report
}

fn validate_catalog(vocab: &Vocabulary, report: &mut ConformanceReport) {
    let catalog = TypeCatalog::global();
    let offenders = collect(vocab, |class, out| {
        if !catalog.contains(class.name) {
            out.push(format!("{} is not cataloged", class.name));
            return;
        }
        for ancestor in class.extends {
            if !catalog.satisfies(class.name, ancestor) {
                out.push(format!("{} does not satisfy ancestor {ancestor}", class.name));
            }
        }
    });
    report.push(TestResult::check(
        "vocab/catalog/capabilities",
        "Every class satisfies the capability of its ancestors",
        "Catalog capabilities disagree with the vocabulary",
        offenders,
    ));
}

fn relations(class: &Class) -> [(&'static str, &'static [&'static str]); 4] {
    [
        ("subclass_of", class.subclass_of),
        ("extends", class.extends),
        ("disjoint_with", class.disjoint_with),
        ("extended_by", class.extended_by),
    ]
}

fn collect(vocab: &Vocabulary, mut check: impl FnMut(&Class, &mut Vec<String>)) -> Vec<String> {
    let mut out = Vec::new();
    for class in vocab.classes() {
        check(class, &mut out);
    }
    out
}
