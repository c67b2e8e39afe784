//! # Condenser Coil
//!
//! Sizing of air-cooled condenser coils as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! Given fin/tube geometry, refrigerant conditions, the air temperature and an
//! overall heat-transfer coefficient, the model finds the tube length each
//! condensation zone needs and how many coil rows that length fills.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Models delegate to an internal computational core. Presentation concerns
//! (printing, forms) live outside the crate and only supply and display
//! quantities; see `demos/reference_coil.rs` for a script-style adapter.

pub mod models;
pub mod support;
