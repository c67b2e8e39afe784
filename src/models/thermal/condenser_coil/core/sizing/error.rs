use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

use super::Zone;

/// Errors from converting duties into tube length and rows.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SizingError {
    /// A divisor of the sizing equations is zero, negative, or not a number.
    #[error("{quantity} must be strictly positive")]
    NonPositive {
        /// Name of the offending quantity.
        quantity: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// A zone duty is negative or not a number.
    #[error("zone duty must not be negative")]
    InvalidDuty(#[source] ConstraintError),

    /// A zone length handed to aggregation is negative or not a number.
    #[error("{zone} zone length must not be negative")]
    InvalidZoneLength {
        zone: Zone,

        #[source]
        source: ConstraintError,
    },

    /// The coil is narrower than one tube pitch, so a row holds no tubes.
    #[error("coil width {width:?} fits no tubes at pitch {pitch:?}")]
    NoTubesPerRow { width: Length, pitch: Length },
}
