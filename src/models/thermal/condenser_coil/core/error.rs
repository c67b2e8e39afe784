use thiserror::Error;

use super::{GeometryError, SizingError, ThermalError};

/// Errors that can occur while sizing a condenser coil.
///
/// Each variant wraps the error of the stage that detected the problem.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoilSizingError {
    /// The tube/fin geometry is not physically realizable.
    #[error("invalid geometry")]
    InvalidGeometry(#[from] GeometryError),

    /// A zone's refrigerant and air temperatures do not drive heat to the air.
    #[error("invalid thermal state")]
    InvalidThermalState(#[from] ThermalError),

    /// A sizing divisor or coil dimension is out of bounds.
    #[error("invalid sizing input")]
    InvalidSizingInput(#[from] SizingError),
}
