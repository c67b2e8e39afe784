//! Heat exchanger analysis toolkit.
//!
//! General-purpose pieces of heat exchanger analysis that are not specific to
//! condenser coils:
//!
//! - [`CapacitanceRate`]: `m_dot * c_p` of a single-phase stream.
//! - [`log_mean_temperature_difference`]: the effective driving temperature
//!   difference between two terminal approach temperatures.
//!
//! # Example
//!
//! ```
//! use condenser_coil::support::hx::log_mean_temperature_difference;
//! use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};
//!
//! let lmtd = log_mean_temperature_difference([
//!     TemperatureInterval::new::<kelvin>(36.0),
//!     TemperatureInterval::new::<kelvin>(15.0),
//! ])
//! .unwrap();
//!
//! assert!((lmtd.get::<kelvin>() - 23.987).abs() < 1e-3);
//! ```

mod capacitance_rate;
mod lmtd;

pub use capacitance_rate::CapacitanceRate;
pub use lmtd::{LmtdError, log_mean_temperature_difference};
