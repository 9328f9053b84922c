//! Artifact validators: RDF syntax, local entities, model variables.

pub mod entities;
pub mod rdf;
pub mod variables;
