//! `UBERON:` anatomy terms referenced outside the cavity table.

use super::UBERON;
use crate::model::Iri;

/// `UBERON:0000178`: blood.
pub const BLOOD: &str = "0000178";

/// `UBERON:0001062`: anatomical entity. Substituted for unknown cavities.
pub const ANATOMICAL_ENTITY: &str = "0001062";

/// Returns the IRI for a UBERON code such as `"0016514"`.
#[must_use]
pub fn term(code: &str) -> Iri {
    UBERON.term(code)
}

/// Returns the IRI of the blood term.
#[must_use]
pub fn blood() -> Iri {
    term(BLOOD)
}

/// Returns the IRI of the generic anatomical entity term.
#[must_use]
pub fn anatomical_entity() -> Iri {
    term(ANATOMICAL_ENTITY)
}
