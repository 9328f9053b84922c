//! Cavity resolution: maps the abbreviation heading a model variable ID to
//! the UBERON term of the anatomical location holding the blood.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::model::Iri;
use crate::namespaces::uberon;

/// One row of the cavity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cavity {
    /// Abbreviation used as the first segment of model IDs.
    pub abbreviation: &'static str,
    /// UBERON code, without the namespace.
    pub uberon: &'static str,
    /// Label of the UBERON term.
    pub label: &'static str,
}

/// Every known cavity abbreviation.
pub const CAVITIES: &[Cavity] = &[
    Cavity {
        abbreviation: "lv",
        uberon: "0016514",
        label: "luminal space of left ventricle",
    },
    Cavity {
        abbreviation: "rv",
        uberon: "0016509",
        label: "luminal space of right ventricle",
    },
    Cavity {
        abbreviation: "la",
        uberon: "0016513",
        label: "luminal space of left atrium",
    },
    Cavity {
        abbreviation: "ra",
        uberon: "0016522",
        label: "luminal space of right atrium",
    },
    // The artery itself rather than its lumen.
    Cavity {
        abbreviation: "pa",
        uberon: "0002012",
        label: "pulmonary artery",
    },
    Cavity {
        abbreviation: "lung",
        uberon: "0000102",
        label: "lung vasculature",
    },
    Cavity {
        abbreviation: "pulm-vein",
        uberon: "0002016",
        label: "pulmonary vein",
    },
    Cavity {
        abbreviation: "brain",
        uberon: "0008998",
        label: "vasculature of brain",
    },
    Cavity {
        abbreviation: "brain-vein",
        uberon: "2005031",
        label: "dorsal longitudinal vein",
    },
    Cavity {
        abbreviation: "aa",
        uberon: "0001496",
        label: "ascending aorta",
    },
    Cavity {
        abbreviation: "celiac",
        uberon: "0001640",
        label: "celiac artery",
    },
    Cavity {
        abbreviation: "sup-mes",
        uberon: "0001182",
        label: "superior mesenteric artery",
    },
    Cavity {
        abbreviation: "stomach",
        uberon: "0000945",
        label: "stomach",
    },
    Cavity {
        abbreviation: "spleen",
        uberon: "0036301",
        label: "vasculature of spleen",
    },
    Cavity {
        abbreviation: "pancreas",
        uberon: "0001264",
        label: "pancreas",
    },
    Cavity {
        abbreviation: "intestine",
        uberon: "0000160",
        label: "intestine",
    },
    Cavity {
        abbreviation: "colon",
        uberon: "0001155",
        label: "colon",
    },
    Cavity {
        abbreviation: "portal-vein",
        uberon: "0002017",
        label: "portal vein",
    },
    Cavity {
        abbreviation: "liver",
        uberon: "0006877",
        label: "vasculature of liver",
    },
];

/// Returns the text before the first `.` of a model ID (the whole ID if it
/// has no `.`).
#[must_use]
pub fn abbreviation(model_id: &str) -> &str {
    model_id
        .split_once('.')
        .map_or(model_id, |(head, _)| head)
}

/// Looks up a cavity by exact abbreviation.
#[must_use]
pub fn lookup(abbreviation: &str) -> Option<&'static Cavity> {
    CAVITIES.iter().find(|c| c.abbreviation == abbreviation)
}

/// Resolves an abbreviation to its UBERON IRI.
///
/// Unknown abbreviations record a [`Diagnostic::unknown_cavity`] and resolve
/// to `UBERON:0001062` (anatomical entity).
pub fn resolve(abbreviation: &str, diagnostics: &mut Diagnostics) -> Iri {
    match lookup(abbreviation) {
        Some(cavity) => uberon::term(cavity.uberon),
        None => {
            diagnostics.push(Diagnostic::unknown_cavity(abbreviation));
            uberon::anatomical_entity()
        }
    }
}
