//! `OMEXlib:` and `local:` subjects: model variables and local entities.

use std::path::{Component, Path};

use super::{LOCAL, OMEX_LIB};
use crate::model::Iri;

/// Renders a model path as the forward-slash locator used inside variable
/// IRIs. `.` components are dropped.
#[must_use]
pub fn model_locator(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            Component::RootDir => Some(String::new()),
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect();
    parts.join("/")
}

/// Returns the IRI of a model variable: `OMEXlib:<locator>#<model_id>`.
///
/// Each locator segment and the model ID are percent-encoded, so spaces and
/// other characters not allowed in an IRI never reach the output.
#[must_use]
pub fn model_variable(locator: &str, model_id: &str) -> Iri {
    let path: Vec<_> = locator.split('/').map(urlencoding::encode).collect();
    OMEX_LIB.term(&format!(
        "{}#{}",
        path.join("/"),
        urlencoding::encode(model_id)
    ))
}

/// Returns the IRI of local entity number `n`: `local:local-node-<n>`.
#[must_use]
pub fn local_node(n: u64) -> Iri {
    LOCAL.term(&format!("local-node-{n}"))
}
