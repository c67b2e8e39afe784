//! Air-side surface of a finned tube.
//!
//! Each fin is a flat annular disk pressed onto the tube. Per unit of tube
//! length the air sees the bare tube wall plus one face of every fin,
//! derated by the fin efficiency.

mod error;

pub use error::GeometryError;

use std::f64::consts::PI;

use num_traits::Zero;
use uom::si::{
    f64::{Area, Length, Ratio},
    ratio::ratio,
};

use crate::support::{
    constraint::{StrictlyPositive, UnitIntervalLowerOpen},
    units::{AreaPerLength, FinDensity},
};

/// Fin efficiency assumed when none is measured.
pub const DEFAULT_FIN_EFFICIENCY: f64 = 0.9;

/// Validated tube and fin dimensions.
///
/// Construct with [`TubeFinGeometry::new`]; an instance always satisfies:
///
/// - every dimension and the fin density are strictly positive,
/// - the fin outer diameter exceeds the fin inner diameter,
/// - the fin efficiency lies in `(0, 1]`,
/// - fins do not overlap (`thickness * density < 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeFinGeometry {
    tube_outer_diameter: Length,
    fin_density: FinDensity,
    fin_thickness: Length,
    fin_outer_diameter: Length,
    fin_inner_diameter: Length,
    fin_efficiency: Ratio,
}

impl TubeFinGeometry {
    /// Validates and captures a tube/fin geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any invariant listed on the type fails.
    pub fn new(
        tube_outer_diameter: Length,
        fin_density: FinDensity,
        fin_thickness: Length,
        fin_outer_diameter: Length,
        fin_inner_diameter: Length,
        fin_efficiency: Ratio,
    ) -> Result<Self, GeometryError> {
        positive(tube_outer_diameter, "tube outer diameter")?;
        positive(fin_density, "fin density")?;
        positive(fin_thickness, "fin thickness")?;
        positive(fin_outer_diameter, "fin outer diameter")?;
        positive(fin_inner_diameter, "fin inner diameter")?;

        if fin_outer_diameter <= fin_inner_diameter {
            return Err(GeometryError::FinDiametersOutOfOrder {
                outer: fin_outer_diameter,
                inner: fin_inner_diameter,
            });
        }

        UnitIntervalLowerOpen::new(fin_efficiency).map_err(GeometryError::FinEfficiency)?;

        let blockage = (fin_thickness * fin_density).get::<ratio>();
        if blockage >= 1.0 {
            return Err(GeometryError::OverlappingFins { blockage });
        }

        Ok(Self {
            tube_outer_diameter,
            fin_density,
            fin_thickness,
            fin_outer_diameter,
            fin_inner_diameter,
            fin_efficiency,
        })
    }

    #[must_use]
    pub fn tube_outer_diameter(&self) -> Length {
        self.tube_outer_diameter
    }

    #[must_use]
    pub fn fin_density(&self) -> FinDensity {
        self.fin_density
    }

    #[must_use]
    pub fn fin_thickness(&self) -> Length {
        self.fin_thickness
    }

    #[must_use]
    pub fn fin_outer_diameter(&self) -> Length {
        self.fin_outer_diameter
    }

    #[must_use]
    pub fn fin_inner_diameter(&self) -> Length {
        self.fin_inner_diameter
    }

    #[must_use]
    pub fn fin_efficiency(&self) -> Ratio {
        self.fin_efficiency
    }

    /// Area of one face of a single fin disk.
    #[must_use]
    pub fn single_fin_area(&self) -> Area {
        PI / 4.0
            * (self.fin_outer_diameter * self.fin_outer_diameter
                - self.fin_inner_diameter * self.fin_inner_diameter)
    }
}

fn positive<T>(value: T, dimension: &'static str) -> Result<(), GeometryError>
where
    T: PartialOrd + Zero,
{
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|source| GeometryError::NonPositive { dimension, source })
}

/// Air-side area per unit tube length, split into bare tube and fins.
///
/// `total` is always `bare + fins`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirsideArea {
    /// Exposed tube wall per unit length.
    pub bare: AreaPerLength,

    /// Effective fin surface per unit length, already derated by fin efficiency.
    pub fins: AreaPerLength,

    /// Sum of `bare` and `fins`.
    pub total: AreaPerLength,
}

/// Computes the air-side heat-transfer area per unit tube length.
///
/// - bare = π · `D_o`
/// - fins = π/4 · (`D_fo`² − `D_fi`²) · fin density · fin efficiency
#[must_use]
pub fn airside_area_per_length(geometry: &TubeFinGeometry) -> AirsideArea {
    let bare: AreaPerLength = PI * geometry.tube_outer_diameter;
    let fins: AreaPerLength = geometry.single_fin_area()
        * geometry.fin_density
        * geometry.fin_efficiency.get::<ratio>();

    AirsideArea {
        bare,
        fins,
        total: bare + fins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_millimeter, length::meter, length::millimeter};

    use crate::models::thermal::condenser_coil::core::{
        Conventions,
        test_support::{mm, reference_geometry},
    };
    use crate::support::constraint::ConstraintError;

    fn with_fins(fins_per_inch: f64, efficiency: f64) -> TubeFinGeometry {
        TubeFinGeometry::new(
            mm(9.52),
            Conventions::default().fins_per_inch(fins_per_inch),
            mm(0.12),
            mm(25.4),
            mm(9.52),
            Ratio::new::<ratio>(efficiency),
        )
        .unwrap()
    }

    #[test]
    fn reference_tube() {
        let area = airside_area_per_length(&reference_geometry());

        assert_relative_eq!(area.bare.get::<meter>(), 0.029_907_962, epsilon = 1e-9);
        assert_relative_eq!(area.fins.get::<meter>(), 0.216_048_161, epsilon = 1e-9);
        assert_relative_eq!(area.total.get::<meter>(), 0.245_956_123, epsilon = 1e-9);
    }

    #[test]
    fn single_fin_is_an_annulus() {
        let fin = reference_geometry().single_fin_area();
        assert_relative_eq!(fin.get::<square_millimeter>(), 435.526_529, epsilon = 1e-5);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn total_is_bare_plus_fins() {
        for (fpi, eta) in [(8.0, 0.5), (10.0, 0.75), (14.0, 0.9), (20.0, 1.0)] {
            let area = airside_area_per_length(&with_fins(fpi, eta));
            assert_eq!(area.total, area.bare + area.fins);
            assert!(area.bare.get::<meter>() >= 0.0);
            assert!(area.fins.get::<meter>() >= 0.0);
        }
    }

    #[test]
    fn more_fins_mean_more_area() {
        let totals: Vec<f64> = [4.0, 8.0, 12.0, 16.0, 20.0]
            .into_iter()
            .map(|fpi| airside_area_per_length(&with_fins(fpi, 0.9)).total.get::<meter>())
            .collect();

        assert!(totals.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn better_fins_mean_more_area() {
        let totals: Vec<f64> = [0.2, 0.4, 0.6, 0.8, 1.0]
            .into_iter()
            .map(|eta| airside_area_per_length(&with_fins(14.0, eta)).total.get::<meter>())
            .collect();

        assert!(totals.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn fin_inner_at_or_above_outer_is_rejected() {
        for inner in [25.4, 30.0] {
            let result = TubeFinGeometry::new(
                mm(9.52),
                Conventions::default().fins_per_inch(14.0),
                mm(0.12),
                mm(25.4),
                mm(inner),
                Ratio::new::<ratio>(0.9),
            );
            assert!(matches!(
                result,
                Err(GeometryError::FinDiametersOutOfOrder { .. })
            ));
        }
    }

    #[test]
    fn non_positive_dimensions_are_named() {
        let result = TubeFinGeometry::new(
            Length::new::<millimeter>(0.0),
            Conventions::default().fins_per_inch(14.0),
            mm(0.12),
            mm(25.4),
            mm(9.52),
            Ratio::new::<ratio>(0.9),
        );
        assert_eq!(
            result,
            Err(GeometryError::NonPositive {
                dimension: "tube outer diameter",
                source: ConstraintError::Zero,
            })
        );

        let result = TubeFinGeometry::new(
            mm(9.52),
            Conventions::default().fins_per_inch(-3.0),
            mm(0.12),
            mm(25.4),
            mm(9.52),
            Ratio::new::<ratio>(0.9),
        );
        assert!(matches!(
            result,
            Err(GeometryError::NonPositive {
                dimension: "fin density",
                ..
            })
        ));
    }

    #[test]
    fn efficiency_outside_unit_interval_is_rejected() {
        for eta in [0.0, -0.1, 1.2, f64::NAN] {
            let result = TubeFinGeometry::new(
                mm(9.52),
                Conventions::default().fins_per_inch(14.0),
                mm(0.12),
                mm(25.4),
                mm(9.52),
                Ratio::new::<ratio>(eta),
            );
            assert!(matches!(result, Err(GeometryError::FinEfficiency(_))));
        }
    }

    #[test]
    fn overlapping_fins_are_rejected() {
        // 14 fins per inch leaves about 1.8 mm per fin.
        let result = TubeFinGeometry::new(
            mm(9.52),
            Conventions::default().fins_per_inch(14.0),
            mm(2.0),
            mm(25.4),
            mm(9.52),
            Ratio::new::<ratio>(0.9),
        );
        assert!(matches!(result, Err(GeometryError::OverlappingFins { .. })));
    }
}
