use uom::si::f64::Length;

/// Face dimensions of a coil built from straight, single-pass tubes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilDimensions {
    /// Length of each straight tube, the coil's axial length.
    pub tube_length: Length,

    /// Coil width across which tubes are stacked at the tube pitch.
    pub width: Length,
}
