//! Public Twine models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core API. The core's entry points and records are
//! re-exported next to the adapter so other front ends can call them directly.

pub mod thermal;
