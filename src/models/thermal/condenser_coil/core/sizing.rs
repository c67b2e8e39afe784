//! Tube length from duty, and rows from tube length.
//!
//! Each zone obeys `Q = U · A · ΔT_lm`, so the air-side area it needs is
//! `A = Q / (U · ΔT_lm)` and the tube length is that area divided by the
//! area per unit tube length. Rows assume straight single-pass tubes, each
//! row holding `tubes_per_row` tubes of the coil's axial length.

mod error;

pub use error::SizingError;

use std::num::NonZeroUsize;

use num_traits::Zero;
use uom::si::{
    f64::{Area, HeatTransfer, Length, Power, TemperatureInterval},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::AreaPerLength,
};

use super::Zone;

/// Air-side area and tube length one zone needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneSizingResult {
    pub required_area: Area,
    pub required_length: Length,
}

/// Coil-level totals, derived from the three zone lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilSizingSummary {
    /// Required tube length per zone, in [`Zone::ALL`] order.
    pub zone_lengths: [Length; 3],

    /// Sum of the zone lengths.
    pub total_length: Length,

    /// Tubes stacked across the coil width in one row.
    pub tubes_per_row: NonZeroUsize,

    /// Fractional number of rows the total length fills.
    pub rows_required: f64,
}

impl CoilSizingSummary {
    /// Rows to build: [`rows_required`](Self::rows_required) rounded up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn whole_rows(&self) -> usize {
        self.rows_required.ceil() as usize
    }
}

/// Computes the area and tube length needed to reject `duty`.
///
/// # Errors
///
/// Returns [`SizingError`] before dividing if the coefficient, the area per
/// length or the LMTD is not strictly positive, or if the duty is negative.
pub fn required_length(
    duty: Power,
    overall_coefficient: HeatTransfer,
    area_per_length: AreaPerLength,
    lmtd: TemperatureInterval,
) -> Result<ZoneSizingResult, SizingError> {
    let duty = NonNegative::new(duty)
        .map_err(SizingError::InvalidDuty)?
        .into_inner();
    let u = positive(overall_coefficient, "overall heat-transfer coefficient")?;
    let area_per_length = positive(area_per_length, "area per length")?;
    let lmtd = positive(lmtd, "log-mean temperature difference")?;

    let required_area: Area = duty / (u * lmtd);
    let required_length: Length = required_area / area_per_length;

    Ok(ZoneSizingResult {
        required_area,
        required_length,
    })
}

/// Number of tubes that fit across `coil_width` at `tube_pitch`, rounded down.
///
/// # Errors
///
/// Fails if either length is not strictly positive or if not even one tube fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tubes_per_row(coil_width: Length, tube_pitch: Length) -> Result<NonZeroUsize, SizingError> {
    let width = positive(coil_width, "coil width")?;
    let pitch = positive(tube_pitch, "tube pitch")?;

    let tubes = (width / pitch).get::<ratio>().floor() as usize;

    NonZeroUsize::new(tubes).ok_or(SizingError::NoTubesPerRow { width, pitch })
}

/// Sums the zone lengths and converts the total into coil rows.
///
/// # Errors
///
/// Fails if a zone length is negative or the tube length is not strictly positive.
#[allow(clippy::cast_precision_loss)]
pub fn aggregate_coil(
    zone_lengths: [Length; 3],
    tubes_per_row: NonZeroUsize,
    tube_length: Length,
) -> Result<CoilSizingSummary, SizingError> {
    let tube_length = positive(tube_length, "tube length")?;

    let total_length = Zone::ALL
        .into_iter()
        .zip(zone_lengths)
        .map(|(zone, length)| {
            NonNegative::new(length)
                .map_err(|source| SizingError::InvalidZoneLength { zone, source })
        })
        .sum::<Result<Constrained<Length, NonNegative>, _>>()?
        .into_inner();

    let row_length = tube_length * tubes_per_row.get() as f64;
    let rows_required = (total_length / row_length).get::<ratio>();

    Ok(CoilSizingSummary {
        zone_lengths,
        total_length,
        tubes_per_row,
        rows_required,
    })
}

fn positive<T>(value: T, quantity: &'static str) -> Result<T, SizingError>
where
    T: PartialOrd + Zero,
{
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| SizingError::NonPositive { quantity, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        heat_transfer::watt_per_square_meter_kelvin,
        length::{inch, meter},
        power::kilowatt,
        temperature_interval::kelvin,
    };

    use crate::support::{constraint::ConstraintError, units::area_per_meter};

    fn u() -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(45.0)
    }

    fn meters(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn desuperheating_zone_length() {
        let result = required_length(
            Power::new::<kilowatt>(10.584),
            u(),
            area_per_meter(0.245_956_123_284_199_7),
            TemperatureInterval::new::<kelvin>(23.987_150_087_703_19),
        )
        .unwrap();

        assert_relative_eq!(
            result.required_area.get::<square_meter>(),
            9.805_250,
            epsilon = 1e-6
        );
        assert_relative_eq!(result.required_length.get::<meter>(), 39.865_850, epsilon = 1e-6);
    }

    #[test]
    fn length_times_area_per_length_is_area() {
        let cases = [
            (10.584, 45.0, 0.246, 23.99),
            (48.048, 45.0, 0.246, 15.0),
            (0.5, 120.0, 1.3, 2.0),
            (250.0, 12.0, 0.05, 40.0),
        ];
        for (q, u, a, dt) in cases {
            let result = required_length(
                Power::new::<kilowatt>(q),
                HeatTransfer::new::<watt_per_square_meter_kelvin>(u),
                area_per_meter(a),
                TemperatureInterval::new::<kelvin>(dt),
            )
            .unwrap();

            let area: Area = result.required_length * area_per_meter(a);
            assert_relative_eq!(
                area.get::<square_meter>(),
                result.required_area.get::<square_meter>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn zero_duty_needs_no_length() {
        let result = required_length(
            Power::new::<kilowatt>(0.0),
            u(),
            area_per_meter(0.246),
            TemperatureInterval::new::<kelvin>(15.0),
        )
        .unwrap();
        assert_eq!(result.required_length, meters(0.0));
    }

    #[test]
    fn non_positive_divisors_are_rejected() {
        let duty = Power::new::<kilowatt>(10.0);
        let a = area_per_meter(0.246);
        let dt = TemperatureInterval::new::<kelvin>(15.0);

        assert_eq!(
            required_length(duty, HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0), a, dt),
            Err(SizingError::NonPositive {
                quantity: "overall heat-transfer coefficient",
                source: ConstraintError::Zero,
            })
        );
        assert_eq!(
            required_length(duty, u(), area_per_meter(-0.1), dt),
            Err(SizingError::NonPositive {
                quantity: "area per length",
                source: ConstraintError::Negative,
            })
        );
        assert_eq!(
            required_length(duty, u(), a, TemperatureInterval::new::<kelvin>(0.0)),
            Err(SizingError::NonPositive {
                quantity: "log-mean temperature difference",
                source: ConstraintError::Zero,
            })
        );
        assert!(matches!(
            required_length(Power::new::<kilowatt>(-1.0), u(), a, dt),
            Err(SizingError::InvalidDuty(ConstraintError::Negative))
        ));
    }

    #[test]
    fn one_meter_coil_at_one_inch_pitch() {
        let tubes = tubes_per_row(meters(1.0), Length::new::<inch>(1.0)).unwrap();
        assert_eq!(tubes.get(), 39);
    }

    #[test]
    fn narrow_coil_has_no_tubes() {
        assert!(matches!(
            tubes_per_row(meters(0.02), meters(0.0254)),
            Err(SizingError::NoTubesPerRow { .. })
        ));
        assert!(matches!(
            tubes_per_row(meters(1.0), meters(0.0)),
            Err(SizingError::NonPositive {
                quantity: "tube pitch",
                ..
            })
        ));
    }

    #[test]
    fn rows_from_total_length() {
        let tubes = NonZeroUsize::new(39).unwrap();
        let summary =
            aggregate_coil([meters(39.9), meters(289.4), meters(39.5)], tubes, meters(1.2))
                .unwrap();

        assert_relative_eq!(summary.total_length.get::<meter>(), 368.8, epsilon = 1e-9);
        assert_relative_eq!(summary.rows_required, 368.8 / 46.8, epsilon = 1e-12);
        assert_eq!(summary.whole_rows(), 8);
    }

    #[test]
    fn exact_rows_do_not_round_up() {
        let tubes = NonZeroUsize::new(10).unwrap();
        let summary =
            aggregate_coil([meters(5.0), meters(10.0), meters(5.0)], tubes, meters(1.0)).unwrap();

        assert_relative_eq!(summary.rows_required, 2.0);
        assert_eq!(summary.whole_rows(), 2);
    }

    #[test]
    fn negative_zone_length_is_rejected() {
        let tubes = NonZeroUsize::new(39).unwrap();
        assert!(matches!(
            aggregate_coil([meters(1.0), meters(-2.0), meters(1.0)], tubes, meters(1.2)),
            Err(SizingError::InvalidZoneLength {
                zone: Zone::Condensation,
                ..
            })
        ));
    }
}
