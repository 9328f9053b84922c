//! Serializers for annotation graphs.
//!
//! - **Turtle** ([`turtle`]): the default output, with namespace prefixes
//! - **N-Triples** ([`ntriples`]): one absolute triple per line

pub mod ntriples;
pub mod turtle;

use crate::model::Graph;
use crate::namespaces;

/// An RDF text serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Format {
    /// Serializes `graph`, binding the annotation namespaces where the format
    /// supports prefixes.
    #[must_use]
    pub fn serialize(self, graph: &Graph) -> String {
        match self {
            Self::Turtle => turtle::to_turtle(graph, &namespaces::ALL),
            Self::NTriples => ntriples::to_ntriples(graph),
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}
