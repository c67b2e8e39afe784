use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

/// Errors that make a tube/fin geometry physically invalid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension or the fin density is zero, negative, or not a number.
    #[error("{dimension} must be strictly positive")]
    NonPositive {
        /// Name of the offending dimension.
        dimension: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The fin outer diameter does not exceed the fin inner diameter.
    #[error("fin outer diameter {outer:?} must exceed fin inner diameter {inner:?}")]
    FinDiametersOutOfOrder { outer: Length, inner: Length },

    /// Fin efficiency lies outside `(0, 1]`.
    #[error("fin efficiency must lie in (0, 1]")]
    FinEfficiency(#[source] ConstraintError),

    /// Fins are too thick for their spacing and would overlap along the tube.
    #[error("fins overlap: thickness times fin density is {blockage}, must be below 1")]
    OverlappingFins {
        /// Fraction of tube length covered by fin material.
        blockage: f64,
    },
}
