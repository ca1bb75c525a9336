//! Domain logic for the vehicle cost predictor
//!
//! Everything here is pure: no I/O, no configuration.

pub mod constants;
pub mod service;
