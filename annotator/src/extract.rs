//! ID extraction: pulls `cmeta:id` values out of a model document and buckets
//! them by quantity kind.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::AnnotateError;
use crate::model::{ModelIds, QuantityKind};

/// The CellML metadata namespace carrying variable IDs.
pub const CELLML_METADATA_NS: &str = "http://www.cellml.org/metadata/1.0#";

/// Local name of the ID attribute.
pub const ID_ATTRIBUTE: &str = "id";

/// Returns every `{cmeta}id` attribute value in document order, the root
/// element and all of its descendants included.
///
/// # Errors
///
/// Returns [`AnnotateError::Parse`] if the document is not well-formed XML.
pub fn metadata_ids(document: &str) -> Result<Vec<String>, AnnotateError> {
    let doc = roxmltree::Document::parse(document)?;
    Ok(doc
        .descendants()
        .filter(|node| node.is_element())
        .filter_map(|node| node.attribute((CELLML_METADATA_NS, ID_ATTRIBUTE)))
        .map(str::to_owned)
        .collect())
}

/// Buckets raw IDs by suffix. IDs with no known suffix are dropped with one
/// [`Diagnostic::unknown_id`] each.
pub fn classify<I>(values: I, diagnostics: &mut Diagnostics) -> ModelIds
where
    I: IntoIterator<Item = String>,
{
    let mut ids = ModelIds::default();
    for value in values {
        match QuantityKind::classify(&value) {
            Some(kind) => ids.push(kind, value),
            None => diagnostics.push(Diagnostic::unknown_id(value)),
        }
    }
    ids
}

/// Extracts and classifies the model variable IDs of a document.
///
/// # Errors
///
/// Returns [`AnnotateError::Parse`] if the document is not well-formed XML.
pub fn model_ids(document: &str, diagnostics: &mut Diagnostics) -> Result<ModelIds, AnnotateError> {
    let raw = metadata_ids(document)?;
    tracing::debug!(count = raw.len(), "extracted metadata ids");
    Ok(classify(raw, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    const MODEL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<model xmlns="http://www.cellml.org/cellml/1.1#"
       xmlns:cmeta="http://www.cellml.org/metadata/1.0#"
       name="cvs" cmeta:id="cvs-model">
  <component name="heart">
    <variable name="V_lv" units="m3" cmeta:id="lv.blood.volume"/>
    <variable name="P_lv" units="Pa" cmeta:id="lv.blood.pressure"/>
    <variable name="Q_aa" units="m3_per_s" cmeta:id="aa.blood.flow"/>
    <variable name="t" units="s" id="not-metadata.blood.volume"/>
    <variable name="V_rv" units="m3" cmeta:id="rv.blood.volume"/>
  </component>
</model>"#;

    #[test]
    fn extracts_in_document_order_including_root() {
        let ids = metadata_ids(MODEL).unwrap_or_default();
        assert_eq!(
            ids,
            [
                "cvs-model",
                "lv.blood.volume",
                "lv.blood.pressure",
                "aa.blood.flow",
                "rv.blood.volume",
            ]
        );
    }

    #[test]
    fn unqualified_id_attribute_is_ignored() {
        let ids = metadata_ids(MODEL).unwrap_or_default();
        assert!(!ids.iter().any(|id| id.starts_with("not-metadata")));
    }

    #[test]
    fn buckets_and_drops() {
        let mut diagnostics = Diagnostics::new();
        let ids = model_ids(MODEL, &mut diagnostics).unwrap_or_default();
        assert_eq!(ids.volume_ids, ["lv.blood.volume", "rv.blood.volume"]);
        assert_eq!(ids.pressure_ids, ["lv.blood.pressure"]);
        assert_eq!(ids.flow_ids, ["aa.blood.flow"]);
        assert_eq!(diagnostics.count(DiagnosticKind::UnknownId), 1);
        assert_eq!(
            diagnostics.iter().next().map(|d| d.subject.as_str()),
            Some("cvs-model")
        );
    }

    #[test]
    fn one_diagnostic_per_dropped_id() {
        let mut diagnostics = Diagnostics::new();
        let values = ["a", "b.blood", "lv.blood.volume", "c.blood.temperature"]
            .map(String::from);
        let ids = classify(values, &mut diagnostics);
        assert_eq!(ids.len(), 1);
        assert_eq!(diagnostics.count(DiagnosticKind::UnknownId), 3);
    }

    #[test]
    fn volume_ids_land_only_in_volume_bucket() {
        let mut diagnostics = Diagnostics::new();
        let values = ["lv.blood.volume", "brain-vein.blood.volume"].map(String::from);
        let ids = classify(values, &mut diagnostics);
        assert_eq!(ids.volume_ids.len(), 2);
        assert!(ids.pressure_ids.is_empty());
        assert!(ids.flow_ids.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let mut diagnostics = Diagnostics::new();
        let result = model_ids("<model><component></model>", &mut diagnostics);
        assert!(matches!(result, Err(AnnotateError::Parse(_))));
    }
}
