//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, power, length).
//! This module provides extensions that are useful for coil sizing but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use condenser_coil::support::units::TemperatureDifference;
//!
//! let refrigerant = ThermodynamicTemperature::new::<degree_celsius>(65.0);
//! let air = ThermodynamicTemperature::new::<degree_celsius>(50.0);
//! let approach = refrigerant.minus(air);
//! // approach is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Finned-tube quantities
//!
//! [`FinDensity`] and [`AreaPerLength`] name the two per-unit-length quantities
//! used to describe a finned tube. Neither has unit constructors in [`uom`], so
//! build them with [`fins_per_meter`] and [`area_per_meter`].

mod quantities;
mod temperature_difference;

pub use quantities::{AreaPerLength, FinDensity, area_per_meter, fins_per_meter};
pub use temperature_difference::TemperatureDifference;
