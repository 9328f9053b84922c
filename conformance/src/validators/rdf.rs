//! RDF 1.1 syntax validator.
//!
//! Parses the artifact with a real Turtle / N-Triples parser and hands the
//! resulting statements to the annotation validators. A parse failure is a
//! conformance failure, not an error.

use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;
use sophia_turtle::parser::{nt, turtle};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifact/rdf";

/// The concrete syntax of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Syntax {
    /// Picks the syntax from the file extension: `.nt` is N-Triples,
    /// everything else Turtle.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("nt") => Self::NTriples,
            _ => Self::Turtle,
        }
    }
}

/// A parsed RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// An IRI.
    Iri(String),
    /// A literal, by lexical form.
    Literal(String),
    /// A blank node or any other non-IRI, non-literal term.
    Blank,
}

impl Node {
    /// Returns the IRI if this is an IRI term.
    #[must_use]
    pub fn iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

/// A parsed triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Subject.
    pub subject: Node,
    /// Predicate.
    pub predicate: Node,
    /// Object.
    pub object: Node,
}

impl Statement {
    /// Returns the subject and object IRIs if the predicate is `predicate`.
    #[must_use]
    pub fn with_predicate(&self, predicate: &str) -> Option<(&Node, &Node)> {
        (self.predicate.iri() == Some(predicate)).then_some((&self.subject, &self.object))
    }
}

fn node<T: Term>(term: T) -> Node {
    if let Some(iri) = term.iri() {
        Node::Iri(iri.as_str().to_owned())
    } else if let Some(lex) = term.lexical_form() {
        let text: &str = &lex;
        Node::Literal(text.to_owned())
    } else {
        Node::Blank
    }
}

fn collect<S: TripleSource>(mut source: S) -> Result<Vec<Statement>, String> {
    let mut statements = Vec::new();
    source
        .for_each_triple(|t| {
            statements.push(Statement {
                subject: node(t.s()),
                predicate: node(t.p()),
                object: node(t.o()),
            });
        })
        .map_err(|e| e.to_string())?;
    Ok(statements)
}

/// Parses `content` as `syntax`.
///
/// # Errors
///
/// Returns the parser's message if the content is not valid RDF.
pub fn parse(content: &str, syntax: Syntax) -> Result<Vec<Statement>, String> {
    match syntax {
        Syntax::Turtle => collect(turtle::parse_str(content)),
        Syntax::NTriples => collect(nt::parse_str(content)),
    }
}

/// Checks that `content` parses and is non-empty. Returns the statements if
/// it parsed.
pub fn validate(
    content: &str,
    syntax: Syntax,
    report: &mut ConformanceReport,
) -> Option<Vec<Statement>> {
    match parse(content, syntax) {
        Ok(statements) if statements.is_empty() => {
            report.push(TestResult::warn(
                VALIDATOR,
                format!("Artifact parses as {syntax:?} but holds no triples"),
            ));
            Some(statements)
        }
        Ok(statements) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("Artifact is valid {syntax:?} ({} triples)", statements.len()),
            ));
            Some(statements)
        }
        Err(message) => {
            report.push(
                TestResult::fail(VALIDATOR, format!("Artifact is not valid {syntax:?}"))
                    .with_details(vec![message]),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn parses_annotated_fixture() {
        let statements = parse(fixtures::ANNOTATED, Syntax::Turtle).unwrap_or_default();
        assert_eq!(statements.len(), 10);
        assert!(statements.iter().all(|s| s.object.iri().is_some()));
    }

    #[test]
    fn parses_ntriples() {
        let nt = "<http://a> <http://p> <http://b> .\n<http://a> <http://p> \"x\" .\n";
        let statements = parse(nt, Syntax::NTriples).unwrap_or_default();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].object, Node::Literal("x".to_owned()));
    }

    #[test]
    fn syntax_error_is_a_failure() {
        let mut report = ConformanceReport::new();
        let parsed = validate("@prefix x: <http://x/> .\nx:a x:b", Syntax::Turtle, &mut report);
        assert!(parsed.is_none());
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn syntax_from_extension() {
        assert_eq!(Syntax::from_path(Path::new("out.nt")), Syntax::NTriples);
        assert_eq!(Syntax::from_path(Path::new("annotations.ttl")), Syntax::Turtle);
        assert_eq!(Syntax::from_path(Path::new("annotations")), Syntax::Turtle);
    }
}
