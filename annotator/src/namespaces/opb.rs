//! `OPB:` physical-property terms.

use super::OPB;
use crate::model::{Iri, QuantityKind};

/// A physical-quantity kind that model variables are annotated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalProperty {
    /// `OPB:OPB_00154`: fluid volume.
    FluidVolume,
    /// `OPB:OPB_00509`: fluid pressure.
    FluidPressure,
}

impl PhysicalProperty {
    /// Every annotated property.
    pub const ALL: [PhysicalProperty; 2] = [Self::FluidVolume, Self::FluidPressure];

    /// The local name in the OPB namespace.
    #[must_use]
    pub fn local_name(self) -> &'static str {
        match self {
            Self::FluidVolume => "OPB_00154",
            Self::FluidPressure => "OPB_00509",
        }
    }

    /// The full OPB IRI.
    #[must_use]
    pub fn iri(self) -> Iri {
        OPB.term(self.local_name())
    }

    /// The property annotated for variables of `kind`. Flow has none.
    #[must_use]
    pub fn for_kind(kind: QuantityKind) -> Option<Self> {
        match kind {
            QuantityKind::Volume => Some(Self::FluidVolume),
            QuantityKind::Pressure => Some(Self::FluidPressure),
            QuantityKind::Flow => None,
        }
    }
}
