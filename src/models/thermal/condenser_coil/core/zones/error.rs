use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::support::{constraint::ConstraintError, hx::LmtdError};

use super::Zone;

/// Errors that make a zone's thermal state physically invalid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThermalError {
    /// An approach temperature (hot side minus air) is zero, negative, or not a number.
    ///
    /// The air is at or above the refrigerant somewhere in the zone, so no
    /// log-mean temperature difference exists.
    #[error("approach temperatures must be positive: inlet={inlet:?}, outlet={outlet:?}")]
    NonPositiveApproach {
        /// Approach at the zone's refrigerant inlet.
        inlet: TemperatureInterval,
        /// Approach at the zone's refrigerant outlet.
        outlet: TemperatureInterval,
    },

    /// The refrigerant temperatures are ordered so that a sensible zone would
    /// have to absorb heat instead of rejecting it.
    #[error("{zone} zone has a negative temperature drop: {drop:?}")]
    NegativeTemperatureDrop {
        zone: Zone,
        drop: TemperatureInterval,
    },

    /// A refrigerant property or flow rate is out of bounds.
    #[error("invalid {property}")]
    InvalidProperty {
        property: &'static str,

        #[source]
        source: ConstraintError,
    },
}

impl From<LmtdError> for ThermalError {
    fn from(err: LmtdError) -> Self {
        match err {
            LmtdError::NonPositiveApproach { first, second } => Self::NonPositiveApproach {
                inlet: first,
                outlet: second,
            },
        }
    }
}
