use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        AvailableEnergy, HeatTransfer, Length, MassRate, Ratio, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::{meter, millimeter},
    mass_rate::kilogram_per_second,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    CoilDimensions, CoilSizingInput, Conventions, RefrigerantConditions, TubeFinGeometry,
};

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// 3/8" tube with 1" round fins at 14 fins per inch.
pub(super) fn reference_geometry() -> TubeFinGeometry {
    TubeFinGeometry::new(
        mm(9.52),
        Conventions::default().fins_per_inch(14.0),
        mm(0.12),
        mm(25.4),
        mm(9.52),
        Ratio::new::<ratio>(0.9),
    )
    .expect("reference geometry is valid")
}

pub(super) fn reference_refrigerant() -> RefrigerantConditions {
    RefrigerantConditions {
        mass_rate: MassRate::new::<kilogram_per_second>(0.48),
        inlet_temperature: celsius(86.0),
        saturation_temperature: celsius(65.0),
        outlet_temperature: celsius(58.0),
        liquid_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(1.45),
        latent_heat: AvailableEnergy::new::<kilojoule_per_kilogram>(100.1),
    }
}

/// The reference coil: 1.2 m tubes across a 1.0 m face, 50°C air, U = 45 W/m²·K.
pub(super) fn reference_input() -> CoilSizingInput {
    CoilSizingInput {
        geometry: reference_geometry(),
        refrigerant: reference_refrigerant(),
        air_temperature: celsius(50.0),
        overall_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(45.0),
        coil: CoilDimensions {
            tube_length: Length::new::<meter>(1.2),
            width: Length::new::<meter>(1.0),
        },
    }
}
