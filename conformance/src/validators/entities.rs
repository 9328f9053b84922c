//! Local blood-cavity entity validator.
//!
//! Checks on the parsed artifact:
//! - No two entities that are `bqbiol:is` blood share a `bqbiol:isPartOf`
//!   location
//! - Every blood entity is part of exactly one location

use std::collections::BTreeMap;

use cvs_annotator::namespaces::{bqbiol, uberon};

use super::rdf::{Node, Statement};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifact/entities";

/// Returns the subjects that are `bqbiol:is` blood, sorted and deduplicated.
#[must_use]
pub fn blood_entities(statements: &[Statement]) -> Vec<&Node> {
    let is = bqbiol::is();
    let blood = uberon::blood();
    let mut entities: Vec<&Node> = statements
        .iter()
        .filter_map(|s| s.with_predicate(is.as_str()))
        .filter(|(_, object)| object.iri() == Some(blood.as_str()))
        .map(|(subject, _)| subject)
        .collect();
    entities.sort();
    entities.dedup();
    entities
}

/// Validates the local entities of a parsed artifact.
pub fn validate(statements: &[Statement]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let is_part_of = bqbiol::is_part_of();
    let entities = blood_entities(statements);

    let mut by_location: BTreeMap<&Node, Vec<&Node>> = BTreeMap::new();
    let mut malformed = Vec::new();
    for entity in &entities {
        let locations: Vec<&Node> = statements
            .iter()
            .filter(|s| &s.subject == *entity)
            .filter_map(|s| s.with_predicate(is_part_of.as_str()))
            .map(|(_, location)| location)
            .collect();
        if locations.len() != 1 {
            malformed.push(format!(
                "{entity:?}: {} isPartOf locations",
                locations.len()
            ));
        }
        for location in locations {
            by_location.entry(location).or_default().push(*entity);
        }
    }

    let duplicates: Vec<String> = by_location
        .iter()
        .filter(|(_, owners)| owners.len() > 1)
        .map(|(location, owners)| format!("{location:?} has {} blood entities", owners.len()))
        .collect();

    if duplicates.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "{} blood entities across {} distinct locations",
                entities.len(),
                by_location.len()
            ),
        ));
    } else {
        report.push(
            TestResult::fail(VALIDATOR, "Locations with more than one blood entity")
                .with_details(duplicates),
        );
    }

    if !malformed.is_empty() {
        report.push(
            TestResult::fail(VALIDATOR, "Blood entities without exactly one location")
                .with_details(malformed),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;
    use crate::validators::rdf::{parse, Syntax};

    fn check(turtle: &str) -> ConformanceReport {
        validate(&parse(turtle, Syntax::Turtle).unwrap_or_default())
    }

    #[test]
    fn annotated_fixture_passes() {
        let report = check(fixtures::ANNOTATED);
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn duplicate_entity_fails() {
        let report = check(fixtures::DUPLICATE_ENTITY);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].details.len(), 1);
    }

    #[test]
    fn counts_blood_entities() {
        let statements = parse(fixtures::ANNOTATED, Syntax::Turtle).unwrap_or_default();
        assert_eq!(blood_entities(&statements).len(), 2);
    }
}
