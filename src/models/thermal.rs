//! Thermal systems models.
//!
//! This module contains models for heat exchangers and related components.

pub mod condenser_coil;
