//! N-Triples serializer for annotation graphs.
//!
//! One triple per line with absolute IRIs, in the graph's sorted order, so
//! output from identical graphs is byte-identical and diff-friendly.

use super::turtle::iri_ref;
use crate::model::Graph;

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(160 * graph.len());
    for t in graph.iter() {
        out.push_str(&iri_ref(t.subject.as_str()));
        out.push(' ');
        out.push_str(&iri_ref(t.predicate.as_str()));
        out.push(' ');
        out.push_str(&iri_ref(t.object.as_str()));
        out.push_str(" .\n");
    }
    out
}
