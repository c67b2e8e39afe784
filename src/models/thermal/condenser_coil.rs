//! Air-cooled condenser coil sizing.
//!
//! [`CondenserCoil`] is the [`twine_core::Model`] adapter. The engine behind it
//! is also exported here so other front ends (forms, scripts) can reuse the
//! same calculations without going through the model interface.
//!
//! # Example
//!
//! ```
//! use condenser_coil::models::thermal::condenser_coil::{
//!     CoilDimensions, CoilSizingInput, CondenserCoil, Conventions, RefrigerantConditions,
//!     TubeFinGeometry,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::*,
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::{meter, millimeter},
//!     mass_rate::kilogram_per_second,
//!     ratio::ratio,
//!     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let conventions = Conventions::default();
//! let mm = Length::new::<millimeter>;
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//!
//! let input = CoilSizingInput {
//!     geometry: TubeFinGeometry::new(
//!         mm(9.52),
//!         conventions.fins_per_inch(14.0),
//!         mm(0.12),
//!         mm(25.4),
//!         mm(9.52),
//!         Ratio::new::<ratio>(0.9),
//!     )?,
//!     refrigerant: RefrigerantConditions {
//!         mass_rate: MassRate::new::<kilogram_per_second>(0.48),
//!         inlet_temperature: celsius(86.0),
//!         saturation_temperature: celsius(65.0),
//!         outlet_temperature: celsius(58.0),
//!         liquid_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(1.45),
//!         latent_heat: AvailableEnergy::new::<kilojoule_per_kilogram>(100.1),
//!     },
//!     air_temperature: celsius(50.0),
//!     overall_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(45.0),
//!     coil: CoilDimensions {
//!         tube_length: Length::new::<meter>(1.2),
//!         width: Length::new::<meter>(1.0),
//!     },
//! };
//!
//! let report = CondenserCoil::new(conventions).call(&input)?;
//! assert_eq!(report.summary.whole_rows(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    AirsideArea, CoilDimensions, CoilSizingError, CoilSizingInput, CoilSizingReport,
    CoilSizingSummary, Conventions, DEFAULT_FIN_EFFICIENCY, GeometryError, RefrigerantConditions,
    SizingError, ThermalError, TubeFinGeometry, Zone, ZoneReport, ZoneSizingResult,
    ZoneThermalState, aggregate_coil, airside_area_per_length, condensation_duty,
    desuperheating_duty, log_mean_temp_diff, required_length, size_coil, subcooling_duty,
    tubes_per_row, zone_states,
};

use twine_core::Model;
use uom::si::length::meter;

/// Condenser coil sizing as a Twine model.
///
/// Holds only the [`Conventions`]; each call sizes the coil described by its
/// input from scratch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CondenserCoil {
    conventions: Conventions,
}

impl CondenserCoil {
    /// Creates a model that sizes coils under the given conventions.
    #[must_use]
    pub fn new(conventions: Conventions) -> Self {
        Self { conventions }
    }

    /// Returns the conventions this model sizes with.
    #[must_use]
    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }
}

impl Model for CondenserCoil {
    type Input = CoilSizingInput;
    type Output = CoilSizingReport;
    type Error = CoilSizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let report = size_coil(input, &self.conventions)?;

        log::debug!(
            "sized condenser coil: total_length={:.3} m, rows_required={:.3}",
            report.summary.total_length.get::<meter>(),
            report.summary.rows_required,
        );

        Ok(report)
    }
}
