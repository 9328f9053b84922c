//! Model variable annotation validator.
//!
//! Every subject carrying `bqbiol:isPropertyOf` or `bqbiol:isVersionOf` is a
//! model variable. Each must have exactly one of each, the property target
//! must be a blood entity defined in the same artifact, and the version
//! target must be a known OPB physical property.

use std::collections::BTreeMap;

use cvs_annotator::namespaces::bqbiol;
use cvs_annotator::PhysicalProperty;

use super::entities::blood_entities;
use super::rdf::{Node, Statement};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifact/variables";

#[derive(Default)]
struct Targets<'a> {
    property_of: Vec<&'a Node>,
    version_of: Vec<&'a Node>,
}

/// Validates the model variable annotations of a parsed artifact.
pub fn validate(statements: &[Statement]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let is_property_of = bqbiol::is_property_of();
    let is_version_of = bqbiol::is_version_of();
    let entities = blood_entities(statements);
    let properties: Vec<String> = PhysicalProperty::ALL
        .iter()
        .map(|p| p.iri().as_str().to_owned())
        .collect();

    let mut variables: BTreeMap<&Node, Targets<'_>> = BTreeMap::new();
    for s in statements {
        if let Some((subject, object)) = s.with_predicate(is_property_of.as_str()) {
            variables.entry(subject).or_default().property_of.push(object);
        } else if let Some((subject, object)) = s.with_predicate(is_version_of.as_str()) {
            variables.entry(subject).or_default().version_of.push(object);
        }
    }

    let mut issues = Vec::new();
    for (variable, targets) in &variables {
        match targets.property_of.as_slice() {
            [entity] if entities.contains(entity) => {}
            [entity] => issues.push(format!(
                "{variable:?}: isPropertyOf {entity:?} is not a blood entity"
            )),
            other => issues.push(format!(
                "{variable:?}: {} isPropertyOf targets",
                other.len()
            )),
        }
        match targets.version_of.as_slice() {
            [Node::Iri(term)] if properties.contains(term) => {}
            [term] => issues.push(format!(
                "{variable:?}: isVersionOf {term:?} is not a known OPB property"
            )),
            other => issues.push(format!(
                "{variable:?}: {} isVersionOf targets",
                other.len()
            )),
        }
    }

    if issues.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} model variables fully annotated", variables.len()),
        ));
    } else {
        report.push(
            TestResult::fail(
                VALIDATOR,
                format!("{} annotation issue(s) on model variables", issues.len()),
            )
            .with_details(issues),
        );
    }

    report
}
