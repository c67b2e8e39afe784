mod coil;
mod refrigerant;

pub use coil::CoilDimensions;
pub use refrigerant::RefrigerantConditions;

use uom::si::f64::{HeatTransfer, ThermodynamicTemperature};

use super::TubeFinGeometry;

/// Everything needed to size one condenser coil.
///
/// Build a fresh input per calculation; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilSizingInput {
    /// Tube and fin dimensions.
    pub geometry: TubeFinGeometry,

    /// Refrigerant flow and state points.
    pub refrigerant: RefrigerantConditions,

    /// Entering air temperature, taken as constant across the coil.
    pub air_temperature: ThermodynamicTemperature,

    /// Overall heat-transfer coefficient referenced to the air-side area.
    pub overall_coefficient: HeatTransfer,

    /// Outer dimensions of the coil face.
    pub coil: CoilDimensions,
}
