//! Heat duty and driving temperature difference of each condenser zone.
//!
//! Refrigerant passes through three zones in series:
//!
//! | zone | refrigerant path | duty |
//! |---|---|---|
//! | desuperheating | `T_in` → `T_sat` | `m_dot · c_p,vapor · (T_in − T_sat)` |
//! | condensation | `T_sat` → `T_sat` | `m_dot · h_fg` |
//! | subcooling | `T_sat` → `T_out` | `m_dot · c_p,liquid · (T_sat − T_out)` |
//!
//! The air is treated as a constant-temperature sink in every zone.

mod error;

pub use error::ThermalError;

use std::fmt;

use uom::{
    ConstZero,
    si::f64::{
        AvailableEnergy, MassRate, Power, SpecificHeatCapacity, TemperatureInterval,
        ThermodynamicTemperature,
    },
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    hx::{CapacitanceRate, log_mean_temperature_difference},
    units::TemperatureDifference,
};

use super::{Conventions, RefrigerantConditions};

/// One of the three condenser zones, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Desuperheating,
    Condensation,
    Subcooling,
}

impl Zone {
    /// All zones in refrigerant flow order.
    pub const ALL: [Zone; 3] = [Zone::Desuperheating, Zone::Condensation, Zone::Subcooling];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Zone::Desuperheating => "desuperheating",
            Zone::Condensation => "condensation",
            Zone::Subcooling => "subcooling",
        })
    }
}

/// Heat duty and log-mean temperature difference of one zone.
///
/// Produced by [`zone_states`], so `duty ≥ 0` and `lmtd > 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneThermalState {
    pub zone: Zone,
    pub duty: Power,
    pub lmtd: TemperatureInterval,
}

/// Log-mean temperature difference between a refrigerant path and constant-temperature air.
///
/// Returns the inlet approach exactly when both approaches are equal, as in
/// the isothermal condensation zone.
///
/// # Errors
///
/// Returns [`ThermalError::NonPositiveApproach`] if the air is not colder than
/// the refrigerant at both ends of the path.
pub fn log_mean_temp_diff(
    hot_in: ThermodynamicTemperature,
    hot_out: ThermodynamicTemperature,
    air: ThermodynamicTemperature,
) -> Result<TemperatureInterval, ThermalError> {
    Ok(log_mean_temperature_difference([
        hot_in.minus(air),
        hot_out.minus(air),
    ])?)
}

/// Heat rejected while cooling superheated vapor to saturation.
///
/// # Errors
///
/// Fails if the mass rate or vapor specific heat is not strictly positive, or
/// if the inlet is colder than saturation.
pub fn desuperheating_duty(
    mass_rate: MassRate,
    vapor_specific_heat: SpecificHeatCapacity,
    inlet_temperature: ThermodynamicTemperature,
    saturation_temperature: ThermodynamicTemperature,
) -> Result<Power, ThermalError> {
    sensible_duty(
        Zone::Desuperheating,
        mass_rate,
        vapor_specific_heat,
        "vapor specific heat",
        inlet_temperature.minus(saturation_temperature),
    )
}

/// Heat rejected while condensing at the saturation temperature.
///
/// # Errors
///
/// Fails if the mass rate is not strictly positive or the latent heat is negative.
pub fn condensation_duty(
    mass_rate: MassRate,
    latent_heat: AvailableEnergy,
) -> Result<Power, ThermalError> {
    let mass_rate = checked_mass_rate(mass_rate)?;
    let latent_heat = NonNegative::new(latent_heat)
        .map_err(|source| ThermalError::InvalidProperty {
            property: "latent heat",
            source,
        })?
        .into_inner();

    Ok(mass_rate * latent_heat)
}

/// Heat rejected while subcooling liquid below saturation.
///
/// # Errors
///
/// Fails if the mass rate or liquid specific heat is not strictly positive, or
/// if the outlet is warmer than saturation.
pub fn subcooling_duty(
    mass_rate: MassRate,
    liquid_specific_heat: SpecificHeatCapacity,
    saturation_temperature: ThermodynamicTemperature,
    outlet_temperature: ThermodynamicTemperature,
) -> Result<Power, ThermalError> {
    sensible_duty(
        Zone::Subcooling,
        mass_rate,
        liquid_specific_heat,
        "liquid specific heat",
        saturation_temperature.minus(outlet_temperature),
    )
}

fn sensible_duty(
    zone: Zone,
    mass_rate: MassRate,
    specific_heat: SpecificHeatCapacity,
    property: &'static str,
    drop: TemperatureInterval,
) -> Result<Power, ThermalError> {
    let mass_rate = checked_mass_rate(mass_rate)?;

    // With a positive mass rate, this only fails on the specific heat.
    let capacitance_rate =
        CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)
            .map_err(|source| ThermalError::InvalidProperty { property, source })?;

    if NonNegative::new(drop).is_err() {
        return Err(ThermalError::NegativeTemperatureDrop { zone, drop });
    }

    Ok(capacitance_rate.sensible_heat(drop))
}

fn checked_mass_rate(mass_rate: MassRate) -> Result<MassRate, ThermalError> {
    StrictlyPositive::new(mass_rate)
        .map(|m| m.into_inner())
        .map_err(|source| ThermalError::InvalidProperty {
            property: "refrigerant mass rate",
            source,
        })
}

/// Computes duty and LMTD for all three zones, in flow order.
///
/// A zone with zero duty (no superheat or no subcooling) is valid and sizes to
/// zero length, but its approach temperatures must still be positive.
///
/// # Errors
///
/// Returns the first [`ThermalError`] found, checking zones in flow order.
pub fn zone_states(
    refrigerant: &RefrigerantConditions,
    air_temperature: ThermodynamicTemperature,
    conventions: &Conventions,
) -> Result<[ZoneThermalState; 3], ThermalError> {
    let RefrigerantConditions {
        mass_rate,
        inlet_temperature: t_in,
        saturation_temperature: t_sat,
        outlet_temperature: t_out,
        liquid_specific_heat,
        latent_heat,
    } = *refrigerant;

    let states = [
        ZoneThermalState {
            zone: Zone::Desuperheating,
            duty: desuperheating_duty(mass_rate, conventions.vapor_specific_heat, t_in, t_sat)?,
            lmtd: log_mean_temp_diff(t_in, t_sat, air_temperature)?,
        },
        ZoneThermalState {
            zone: Zone::Condensation,
            duty: condensation_duty(mass_rate, latent_heat)?,
            lmtd: log_mean_temp_diff(t_sat, t_sat, air_temperature)?,
        },
        ZoneThermalState {
            zone: Zone::Subcooling,
            duty: subcooling_duty(mass_rate, liquid_specific_heat, t_sat, t_out)?,
            lmtd: log_mean_temp_diff(t_sat, t_out, air_temperature)?,
        },
    ];

    for state in &states {
        if state.duty == Power::ZERO {
            log::warn!("{} zone has no duty and needs no tube length", state.zone);
        }
    }

    Ok(states)
}
