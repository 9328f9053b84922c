//! Vocabulary namespaces used by the annotations.
//!
//! The IRIs must match exactly for downstream consumers of the annotation
//! file. Each sub-module holds the terms of one namespace.

pub mod bqbiol;
pub mod omex;
pub mod opb;
pub mod uberon;

use crate::model::Iri;

/// A vocabulary namespace: Turtle prefix plus base IRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The prefix bound in serialized output (e.g., `"bqbiol"`).
    pub prefix: &'static str,
    /// The namespace IRI that local names are appended to.
    pub iri: &'static str,
}

impl Namespace {
    /// Mints the IRI `<namespace><local>`.
    #[must_use]
    pub fn term(&self, local: &str) -> Iri {
        Iri::new(format!("{}{}", self.iri, local))
    }

    /// Returns the local part of `iri` if it lies in this namespace.
    #[must_use]
    pub fn strip<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.iri)
    }
}

/// OMEX library catalog.
pub const OMEX_LIB: Namespace = Namespace {
    prefix: "OMEXlib",
    iri: "http://omex-library.org/",
};

/// Run-local annotation entities.
pub const LOCAL: Namespace = Namespace {
    prefix: "local",
    iri: "http://omex-library.org/annotations.ttl#",
};

/// BioModels biology qualifiers.
pub const BQBIOL: Namespace = Namespace {
    prefix: "bqbiol",
    iri: "http://biomodels.net/biology-qualifiers/",
};

/// UBERON cross-species anatomy ontology.
pub const UBERON: Namespace = Namespace {
    prefix: "UBERON",
    iri: "http://purl.obolibrary.org/obo/UBERON_",
};

/// Ontology of Physics for Biology.
pub const OPB: Namespace = Namespace {
    prefix: "OPB",
    iri: "http://bhi.washington.edu/OPB#",
};

/// Namespaces bound in serialized output, in declaration order.
pub const ALL: [Namespace; 5] = [OPB, UBERON, OMEX_LIB, LOCAL, BQBIOL];
