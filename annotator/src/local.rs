//! Local blood-cavity entities.
//!
//! A local entity is a run-scoped node composing two facts, "is blood" and
//! "is part of <location>", into one subject that model variables can be a
//! property of. At most one exists per location in a graph.

use crate::model::{Graph, Iri};
use crate::namespaces::{bqbiol, omex, uberon};

/// Local identifiers at or below this value are reserved for externally
/// assigned entities.
pub const RESERVED_LOCAL_IDS: u64 = 1024;

/// Mints `local:local-node-<n>` identifiers with strictly increasing `n`.
///
/// One allocator is threaded through a single annotation run.
#[derive(Debug, Clone)]
pub struct LocalIdAllocator {
    last: u64,
}

impl Default for LocalIdAllocator {
    fn default() -> Self {
        Self::starting_after(RESERVED_LOCAL_IDS)
    }
}

impl LocalIdAllocator {
    /// An allocator whose first identifier is `RESERVED_LOCAL_IDS + 1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator whose first identifier is `last + 1`.
    #[must_use]
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Mints the next local entity IRI.
    pub fn next_iri(&mut self) -> Iri {
        self.last += 1;
        omex::local_node(self.last)
    }

    /// Number of identifiers minted by an allocator started after
    /// [`RESERVED_LOCAL_IDS`].
    #[must_use]
    pub fn minted(&self) -> u64 {
        self.last.saturating_sub(RESERVED_LOCAL_IDS)
    }
}

/// Returns the first subject that `is` blood and `isPartOf` `location`.
#[must_use]
pub fn find_blood_in(graph: &Graph, location: &Iri) -> Option<Iri> {
    let is = bqbiol::is();
    let is_part_of = bqbiol::is_part_of();
    let blood = uberon::blood();
    let found = graph
        .subjects(&is_part_of, location)
        .find(|subject| graph.contains(subject, &is, &blood))
        .cloned();
    found
}

/// Returns the local entity for "blood, part of `location`", creating it if
/// the graph has none.
///
/// A new entity adds `(local, bqbiol:is, UBERON:0000178)` and
/// `(local, bqbiol:isPartOf, location)`.
pub fn blood_in(graph: &mut Graph, ids: &mut LocalIdAllocator, location: &Iri) -> Iri {
    if let Some(existing) = find_blood_in(graph, location) {
        tracing::trace!(%existing, %location, "reusing local entity");
        return existing;
    }

    let local = ids.next_iri();
    tracing::debug!(%local, %location, "minted local entity");
    graph.insert(local.clone(), bqbiol::is(), uberon::blood());
    graph.insert(local.clone(), bqbiol::is_part_of(), location.clone());
    local
}
