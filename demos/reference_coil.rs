//! Sizes the reference condenser coil and prints the result.
//!
//! Run with `cargo run --example reference_coil`.

use condenser_coil::models::thermal::condenser_coil::{
    CoilDimensions, CoilSizingInput, CondenserCoil, Conventions, DEFAULT_FIN_EFFICIENCY,
    RefrigerantConditions, TubeFinGeometry,
};
use twine_core::Model;
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        AvailableEnergy, HeatTransfer, Length, MassRate, Ratio, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::{meter, millimeter},
    mass_rate::kilogram_per_second,
    power::kilowatt,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let conventions = Conventions::default();
    let mm = Length::new::<millimeter>;
    let celsius = ThermodynamicTemperature::new::<degree_celsius>;

    let input = CoilSizingInput {
        // 3/8" tube, 1" fins at 14 FPI.
        geometry: TubeFinGeometry::new(
            mm(9.52),
            conventions.fins_per_inch(14.0),
            mm(0.12),
            mm(25.4),
            mm(9.52),
            Ratio::new::<ratio>(DEFAULT_FIN_EFFICIENCY),
        )?,
        refrigerant: RefrigerantConditions {
            mass_rate: MassRate::new::<kilogram_per_second>(0.48),
            inlet_temperature: celsius(86.0),
            saturation_temperature: celsius(65.0),
            outlet_temperature: celsius(58.0),
            liquid_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(1.45),
            latent_heat: AvailableEnergy::new::<kilojoule_per_kilogram>(100.1),
        },
        air_temperature: celsius(50.0),
        overall_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(45.0),
        coil: CoilDimensions {
            tube_length: Length::new::<meter>(1.2),
            width: Length::new::<meter>(1.0),
        },
    };

    let report = CondenserCoil::new(conventions).call(&input)?;

    println!(
        "Finned area per meter: {:.4} m² (bare {:.4}, fins {:.4})",
        report.airside_area.total.get::<meter>(),
        report.airside_area.bare.get::<meter>(),
        report.airside_area.fins.get::<meter>(),
    );
    for zone in &report.zones {
        println!(
            "{:>15}: duty {:7.3} kW, LMTD {:6.2} K, length {:7.2} m",
            zone.thermal.zone.to_string(),
            zone.thermal.duty.get::<kilowatt>(),
            zone.thermal.lmtd.get::<kelvin>(),
            zone.sizing.required_length.get::<meter>(),
        );
    }
    println!(
        "Total tube length required: {:.2} m",
        report.summary.total_length.get::<meter>()
    );
    println!("Tubes per row: {}", report.summary.tubes_per_row);
    println!(
        "Estimated rows required: {:.2} ({} whole rows)",
        report.summary.rows_required,
        report.summary.whole_rows()
    );

    Ok(())
}
