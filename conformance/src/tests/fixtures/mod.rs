//! Annotation artifact fixtures for conformance validation.
//!
//! Each constant holds a Turtle 1.1 document shaped like the annotator's
//! output. `ANNOTATED` conforms; the others each break one invariant.

mod annotated;
mod broken;

pub use annotated::ANNOTATED;
pub use broken::{DANGLING_PROPERTY, DUPLICATE_ENTITY, MISSING_VERSION};
