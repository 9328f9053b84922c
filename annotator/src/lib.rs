//! Semantic annotation of cardiovascular CellML models.
//!
//! The `cvs-annotator` crate reads the `cmeta:id` values of a CellML model,
//! classifies blood volume/pressure/flow variables by ID suffix, resolves the
//! anatomical cavity named by each ID's first segment to a UBERON term, and
//! records the result as `bqbiol` RDF triples against OPB physical-property
//! terms.
//!
//! # Entry Point
//!
//! ```
//! let model = r#"<model xmlns:cmeta="http://www.cellml.org/metadata/1.0#">
//!   <variable cmeta:id="lv.blood.volume"/>
//! </model>"#;
//! let annotation = cvs_annotator::annotate_document(model, "models/cvs-model.cellml")?;
//! assert_eq!(annotation.graph.len(), 4);
//! # Ok::<(), cvs_annotator::AnnotateError>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! # let annotation = cvs_annotator::annotate_document("<model/>", "m.cellml")?;
//! let turtle = cvs_annotator::serializer::Format::Turtle.serialize(&annotation.graph);
//! assert!(turtle.starts_with("@prefix OPB:"));
//! # Ok::<(), cvs_annotator::AnnotateError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod cavity;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod extract;
pub mod local;
pub mod model;
pub mod namespaces;
pub mod pipeline;
pub mod serializer;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::AnnotateError;
pub use local::LocalIdAllocator;
pub use model::{Graph, Iri, ModelIds, QuantityKind, Triple};
pub use namespaces::opb::PhysicalProperty;
pub use pipeline::{annotate_document, annotate_file, read_model, Annotation};
pub use serializer::Format;
