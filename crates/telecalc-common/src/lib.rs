//! Shared types and formulas for the Telecalc service.
//!
//! This crate contains:
//! - **Formulas** — link budget, cellular capacity, wireless coding chain, OFDM throughput
//! - **Cluster solver** — hexagonal `(i, j)` move for a reuse factor
//! - **Validation** — field-level input checks reported all at once
//! - **Result sets** — ordered, labelled metrics as returned to clients

pub mod cellular;
pub mod cluster;
pub mod link_budget;
pub mod ofdm;
pub mod results;
pub mod validate;
pub mod wcs;

pub use results::{MetricValue, ResultSet};
pub use validate::{FieldError, Validate, ValidationError};

/// Round to `places` decimal digits, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
