//! Annotation emitter: ties one model variable to its blood-cavity entity
//! and its physical-property term.

use crate::cavity;
use crate::diagnostics::Diagnostics;
use crate::local::{self, LocalIdAllocator};
use crate::model::Graph;
use crate::namespaces::opb::PhysicalProperty;
use crate::namespaces::{bqbiol, omex};

/// Annotates the model variable `model_id` of the model at `locator`.
///
/// Inserts exactly two triples about `OMEXlib:<locator>#<model_id>`:
/// `bqbiol:isPropertyOf` the local blood entity of the variable's cavity,
/// and `bqbiol:isVersionOf` the OPB term of `property`.
pub fn annotate_variable(
    graph: &mut Graph,
    ids: &mut LocalIdAllocator,
    diagnostics: &mut Diagnostics,
    locator: &str,
    model_id: &str,
    property: PhysicalProperty,
) {
    let variable = omex::model_variable(locator, model_id);
    let location = cavity::resolve(cavity::abbreviation(model_id), diagnostics);
    let entity = local::blood_in(graph, ids, &location);

    tracing::debug!(%variable, %entity, ?property, "annotating variable");
    graph.insert(variable.clone(), bqbiol::is_property_of(), entity);
    graph.insert(variable, bqbiol::is_version_of(), property.iri());
}
