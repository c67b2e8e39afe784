use uom::si::{
    f64::{Length, SpecificHeatCapacity},
    length::inch,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
};

use crate::support::units::{FinDensity, fins_per_meter};

/// Named physical assumptions used while sizing a coil.
///
/// The defaults reproduce the reference coil calculation. Override a field to
/// use a different convention (e.g., a measured vapor specific heat or a
/// metric tube pitch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conventions {
    /// Multiplier turning fins per inch into fins per meter.
    ///
    /// This is `39.37`, not the exact `1 / 0.0254`, so results match the
    /// reference calculation digit for digit.
    pub fins_per_inch_to_per_meter: f64,

    /// Specific heat of superheated refrigerant vapor.
    ///
    /// An approximation for the desuperheating zone, not a property lookup.
    pub vapor_specific_heat: SpecificHeatCapacity,

    /// Center-to-center tube spacing across the coil width.
    pub tube_pitch: Length,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            fins_per_inch_to_per_meter: 39.37,
            vapor_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(1.05),
            tube_pitch: Length::new::<inch>(1.0),
        }
    }
}

impl Conventions {
    /// Converts a fin pitch given in fins per inch into a [`FinDensity`].
    #[must_use]
    pub fn fins_per_inch(&self, fins_per_inch: f64) -> FinDensity {
        fins_per_meter(fins_per_inch * self.fins_per_inch_to_per_meter)
    }
}
