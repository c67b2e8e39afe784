//! Condenser coil sizing engine.
//!
//! The pipeline runs in one direction:
//!
//! 1. `geometry`: tube/fin dimensions → air-side area per unit length.
//! 2. `zones`: refrigerant and air temperatures → duty and LMTD per zone.
//! 3. `sizing`: duty, LMTD and area per length → tube length per zone,
//!    then total length → coil rows.
//!
//! Every function is pure; [`size_coil`] runs the whole pipeline on an
//! explicit [`CoilSizingInput`].

mod conventions;
mod error;
mod geometry;
mod input;
mod results;
mod sizing;
mod zones;

#[cfg(test)]
mod test_support;

pub use conventions::Conventions;
pub use error::CoilSizingError;
pub use geometry::{
    AirsideArea, DEFAULT_FIN_EFFICIENCY, GeometryError, TubeFinGeometry, airside_area_per_length,
};
pub use input::{CoilDimensions, CoilSizingInput, RefrigerantConditions};
pub use results::{CoilSizingReport, ZoneReport};
pub use sizing::{
    CoilSizingSummary, SizingError, ZoneSizingResult, aggregate_coil, required_length,
    tubes_per_row,
};
pub use zones::{
    ThermalError, Zone, ZoneThermalState, condensation_duty, desuperheating_duty,
    log_mean_temp_diff, subcooling_duty, zone_states,
};

/// Sizes a condenser coil.
///
/// # Errors
///
/// Returns a [`CoilSizingError`] from the first stage that rejects its inputs.
pub fn size_coil(
    input: &CoilSizingInput,
    conventions: &Conventions,
) -> Result<CoilSizingReport, CoilSizingError> {
    let airside_area = airside_area_per_length(&input.geometry);
    let thermal = zone_states(&input.refrigerant, input.air_temperature, conventions)?;

    let size_zone = |thermal: ZoneThermalState| -> Result<ZoneReport, SizingError> {
        let sizing = required_length(
            thermal.duty,
            input.overall_coefficient,
            airside_area.total,
            thermal.lmtd,
        )?;
        Ok(ZoneReport { thermal, sizing })
    };

    let [desuperheating, condensation, subcooling] = thermal.map(size_zone);
    let zones = [desuperheating?, condensation?, subcooling?];

    let tubes = tubes_per_row(input.coil.width, conventions.tube_pitch)?;
    let summary = aggregate_coil(
        zones.map(|zone| zone.sizing.required_length),
        tubes,
        input.coil.tube_length,
    )?;

    Ok(CoilSizingReport {
        airside_area,
        zones,
        summary,
    })
}
