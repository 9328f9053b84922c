//! Core graph model types.
//!
//! An annotation run builds a small RDF graph made only of IRIs: model
//! variables, local blood-cavity entities, and ontology terms. The store keeps
//! triples in an ordered set so that iteration, pattern queries, and the
//! serialized output are all deterministic.

use std::collections::BTreeSet;
use std::fmt;

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Wraps an absolute IRI string.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject IRI.
    pub subject: Iri,
    /// Predicate IRI.
    pub predicate: Iri,
    /// Object IRI.
    pub object: Iri,
}

/// The quantity kind encoded by the last two segments of a model variable ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    /// `<cavity>.blood.volume`
    Volume,
    /// `<cavity>.blood.pressure`
    Pressure,
    /// `<cavity>.blood.flow`
    Flow,
}

impl QuantityKind {
    /// All kinds, in classification order.
    pub const ALL: [QuantityKind; 3] = [Self::Volume, Self::Pressure, Self::Flow];

    /// Returns the ID suffix that selects this kind.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Volume => ".blood.volume",
            Self::Pressure => ".blood.pressure",
            Self::Flow => ".blood.flow",
        }
    }

    /// Classifies a model variable ID by suffix, or `None` if no suffix matches.
    #[must_use]
    pub fn classify(model_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| model_id.ends_with(kind.suffix()))
    }
}

/// Model variable IDs extracted from a model document, bucketed by kind.
///
/// Each bucket preserves document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelIds {
    /// IDs ending in `.blood.volume`.
    pub volume_ids: Vec<String>,
    /// IDs ending in `.blood.pressure`.
    pub pressure_ids: Vec<String>,
    /// IDs ending in `.blood.flow`. Extracted but never annotated.
    pub flow_ids: Vec<String>,
}

impl ModelIds {
    /// Returns the bucket for `kind`.
    #[must_use]
    pub fn bucket(&self, kind: QuantityKind) -> &[String] {
        match kind {
            QuantityKind::Volume => &self.volume_ids,
            QuantityKind::Pressure => &self.pressure_ids,
            QuantityKind::Flow => &self.flow_ids,
        }
    }

    /// Appends `model_id` to the bucket for `kind`.
    pub fn push(&mut self, kind: QuantityKind, model_id: impl Into<String>) {
        let bucket = match kind {
            QuantityKind::Volume => &mut self.volume_ids,
            QuantityKind::Pressure => &mut self.pressure_ids,
            QuantityKind::Flow => &mut self.flow_ids,
        };
        bucket.push(model_id.into());
    }

    /// Total number of classified IDs across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.volume_ids.len() + self.pressure_ids.len() + self.flow_ids.len()
    }

    /// Returns true if no ID was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory triple store.
///
/// Triples are kept in an ordered set: inserting a duplicate is a no-op, and
/// every query yields matches sorted by subject, then predicate, then object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triple. Returns false if it was already present.
    pub fn insert(&mut self, subject: Iri, predicate: Iri, object: Iri) -> bool {
        self.triples.insert(Triple {
            subject,
            predicate,
            object,
        })
    }

    /// Returns true if the graph contains the given triple.
    #[must_use]
    pub fn contains(&self, subject: &Iri, predicate: &Iri, object: &Iri) -> bool {
        self.triples.contains(&Triple {
            subject: subject.clone(),
            predicate: predicate.clone(),
            object: object.clone(),
        })
    }

    /// Iterates over the triples matching a pattern. `None` matches any term.
    pub fn triples_matching<'a>(
        &'a self,
        subject: Option<&'a Iri>,
        predicate: Option<&'a Iri>,
        object: Option<&'a Iri>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| &t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        })
    }

    /// Iterates over the subjects of triples with the given predicate and object.
    pub fn subjects<'a>(
        &'a self,
        predicate: &'a Iri,
        object: &'a Iri,
    ) -> impl Iterator<Item = &'a Iri> + 'a {
        self.triples_matching(None, Some(predicate), Some(object))
            .map(|t| &t.subject)
    }

    /// Iterates over all triples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}
