use uom::si::f64::{AvailableEnergy, MassRate, SpecificHeatCapacity, ThermodynamicTemperature};

/// Refrigerant flow through the condenser.
///
/// Vapor enters superheated at `inlet_temperature`, condenses at
/// `saturation_temperature`, and leaves subcooled at `outlet_temperature`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefrigerantConditions {
    /// Refrigerant mass flow rate.
    pub mass_rate: MassRate,

    /// Superheated vapor temperature at the coil inlet.
    pub inlet_temperature: ThermodynamicTemperature,

    /// Condensing (saturation) temperature.
    pub saturation_temperature: ThermodynamicTemperature,

    /// Subcooled liquid temperature at the coil outlet.
    pub outlet_temperature: ThermodynamicTemperature,

    /// Specific heat of the liquid refrigerant.
    pub liquid_specific_heat: SpecificHeatCapacity,

    /// Latent heat of condensation at the saturation temperature.
    pub latent_heat: AvailableEnergy,
}
