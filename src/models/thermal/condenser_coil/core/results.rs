//! Results of a coil sizing calculation.

use super::{AirsideArea, CoilSizingSummary, ZoneSizingResult, ZoneThermalState};

/// Thermal state and size of one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneReport {
    pub thermal: ZoneThermalState,
    pub sizing: ZoneSizingResult,
}

/// Everything a front end needs to display a sized coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilSizingReport {
    /// Air-side area per unit tube length of the finned tube.
    pub airside_area: AirsideArea,

    /// Per-zone results in refrigerant flow order.
    pub zones: [ZoneReport; 3],

    /// Coil totals.
    pub summary: CoilSizingSummary,
}
