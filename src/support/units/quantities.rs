use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Area, Length},
        area::square_meter,
        length::meter,
    },
    typenum::{N1, P1, Z0},
};

/// Fins per unit of axial tube length, 1/m in SI.
pub type FinDensity = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Air-side surface area per unit of axial tube length, m²/m in SI.
///
/// Dimensionally this is a length, so values are read back with
/// `uom::si::length` units (e.g., `get::<meter>()` yields m²/m).
pub type AreaPerLength = Quantity<ISQ<P1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`FinDensity`] from a count of fins per meter of tube.
#[must_use]
pub fn fins_per_meter(value: f64) -> FinDensity {
    value / Length::new::<meter>(1.0)
}

/// Creates an [`AreaPerLength`] from square meters of surface per meter of tube.
#[must_use]
pub fn area_per_meter(value: f64) -> AreaPerLength {
    Area::new::<square_meter>(value) / Length::new::<meter>(1.0)
}
