//! `bqbiol:` biology qualifiers used as predicates.

use super::BQBIOL;
use crate::model::Iri;

/// `bqbiol:is`: the subject is the object.
pub const IS: &str = "is";
/// `bqbiol:isPartOf`: the subject is a physical part of the object.
pub const IS_PART_OF: &str = "isPartOf";
/// `bqbiol:isPropertyOf`: the subject is a property of the object.
pub const IS_PROPERTY_OF: &str = "isPropertyOf";
/// `bqbiol:isVersionOf`: the subject is an instance of the object.
pub const IS_VERSION_OF: &str = "isVersionOf";

/// Returns the `bqbiol:is` predicate.
#[must_use]
pub fn is() -> Iri {
    BQBIOL.term(IS)
}

/// Returns the `bqbiol:isPartOf` predicate.
#[must_use]
pub fn is_part_of() -> Iri {
    BQBIOL.term(IS_PART_OF)
}

/// Returns the `bqbiol:isPropertyOf` predicate.
#[must_use]
pub fn is_property_of() -> Iri {
    BQBIOL.term(IS_PROPERTY_OF)
}

/// Returns the `bqbiol:isVersionOf` predicate.
#[must_use]
pub fn is_version_of() -> Iri {
    BQBIOL.term(IS_VERSION_OF)
}
