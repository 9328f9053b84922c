//! Conformance suite for CVS annotation artifacts.
//!
//! Validates an emitted annotation file against the RDF syntax it claims and
//! the invariants the annotator guarantees.
//!
//! # Conformance Scope
//!
//! | Check | Standard |
//! |-------|----------|
//! | Syntax | RDF 1.1 Turtle / N-Triples |
//! | Local entities | one blood entity per `bqbiol:isPartOf` location |
//! | Model variables | one `isPropertyOf` blood entity, one `isVersionOf` OPB term |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = cvs_conformance::run_all(Path::new("annotations.ttl"))?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
#[cfg(test)]
mod tests;
pub mod validators;

use std::path::Path;

use anyhow::{Context, Result};

pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::rdf::Syntax;

/// Runs every validator against in-memory artifact content.
///
/// Validators are run in this order:
/// 1. RDF syntax (the remaining checks are skipped if it fails)
/// 2. Local blood-cavity entities
/// 3. Model variable annotations
pub fn check_str(content: &str, syntax: Syntax) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(statements) = validators::rdf::validate(content, syntax, &mut report) else {
        return report;
    };
    report.extend(validators::entities::validate(&statements));
    report.extend(validators::variables::validate(&statements));
    report
}

/// Reads the artifact at `artifact` and runs every validator against it.
/// The syntax is chosen from the file extension.
///
/// # Errors
///
/// Returns an error only if the artifact cannot be read.
pub fn run_all(artifact: &Path) -> Result<ConformanceReport> {
    let content = std::fs::read_to_string(artifact)
        .with_context(|| format!("Failed to read {}", artifact.display()))?;
    Ok(check_str(&content, Syntax::from_path(artifact)))
}

#[cfg(test)]
mod run_tests {
    use super::*;
    use cvs_annotator::{annotate_document, Format};

    const MODEL: &str = r#"<model xmlns:cmeta="http://www.cellml.org/metadata/1.0#">
  <variable cmeta:id="lv.blood.volume"/>
  <variable cmeta:id="lv.blood.pressure"/>
  <variable cmeta:id="portal-vein.blood.volume"/>
  <variable cmeta:id="unknown-cavity.blood.pressure"/>
  <variable cmeta:id="aa.blood.flow"/>
</model>"#;

    #[test]
    fn annotator_output_conforms_in_both_formats() -> Result<()> {
        let annotation = annotate_document(MODEL, "models/cvs-model.cellml")?;
        for (format, syntax) in [
            (Format::Turtle, Syntax::Turtle),
            (Format::NTriples, Syntax::NTriples),
        ] {
            let report = check_str(&format.serialize(&annotation.graph), syntax);
            assert!(report.all_passed(), "{format:?}: {:#?}", report.results);
            assert_eq!(report.count(Severity::Pass), 3);
        }
        Ok(())
    }

    #[test]
    fn iris_with_spaces_and_brackets_conform() -> Result<()> {
        let model = r#"<model xmlns:cmeta="http://www.cellml.org/metadata/1.0#">
  <variable cmeta:id="lv x.blood.volume"/>
  <variable cmeta:id="lv&lt;1.blood.pressure"/>
</model>"#;
        let annotation = annotate_document(model, "my models/cvs-model.cellml")?;
        assert_eq!(annotation.graph.len(), 6);
        for (format, syntax) in [
            (Format::Turtle, Syntax::Turtle),
            (Format::NTriples, Syntax::NTriples),
        ] {
            let report = check_str(&format.serialize(&annotation.graph), syntax);
            assert!(report.all_passed(), "{format:?}: {:#?}", report.results);
        }
        Ok(())
    }

    #[test]
    fn turtle_and_ntriples_agree_on_triple_count() -> Result<()> {
        let annotation = annotate_document(MODEL, "models/cvs-model.cellml")?;
        let ttl = validators::rdf::parse(
            &Format::Turtle.serialize(&annotation.graph),
            Syntax::Turtle,
        )
        .map_err(anyhow::Error::msg)?;
        let nt = validators::rdf::parse(
            &Format::NTriples.serialize(&annotation.graph),
            Syntax::NTriples,
        )
        .map_err(anyhow::Error::msg)?;
        assert_eq!(ttl.len(), annotation.graph.len());
        assert_eq!(nt.len(), annotation.graph.len());
        Ok(())
    }

    #[test]
    fn run_all_reads_artifact() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("annotations.ttl");
        std::fs::write(&path, tests::fixtures::ANNOTATED)?;
        assert!(run_all(&path)?.all_passed());
        Ok(())
    }

    #[test]
    fn missing_artifact_is_an_error() {
        assert!(run_all(Path::new("no/such/annotations.ttl")).is_err());
    }

    #[test]
    fn broken_syntax_skips_remaining_checks() {
        let report = check_str("not turtle at all", Syntax::Turtle);
        assert_eq!(report.results.len(), 1);
        assert!(!report.all_passed());
    }
}
