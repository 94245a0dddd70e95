//! Field-level input validation.
//!
//! Every calculator input implements [`Validate`]. A failed check never
//! short-circuits: all offending fields are collected so the client can fix
//! them in one round trip. Field names are the JSON keys the client sent.

use serde::Serialize;
use thiserror::Error;

// ── Errors ──────────────────────────────────────────────────────────

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Input rejected before any formula ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", summary(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn summary(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Single-field error.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Names of the rejected fields, in the order they were checked.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

// ── Trait ───────────────────────────────────────────────────────────

/// Checks an input against its documented constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

// ── Checker ─────────────────────────────────────────────────────────

/// Accumulates field errors for one input.
#[derive(Debug, Default)]
pub struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    /// Value must be a finite number (JSON cannot carry NaN, but callers
    /// constructing inputs in Rust can).
    pub fn finite(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() {
            self.reject(field, "must be a finite number");
        }
        self
    }

    pub fn positive(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() {
            self.reject(field, "must be a finite number");
        } else if value <= 0.0 {
            self.reject(field, "must be greater than 0");
        }
        self
    }

    pub fn non_negative(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() {
            self.reject(field, "must be a finite number");
        } else if value < 0.0 {
            self.reject(field, "must be greater than or equal to 0");
        }
        self
    }

    /// Value must lie in the half-open interval (0, 1].
    pub fn unit_rate(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() {
            self.reject(field, "must be a finite number");
        } else if value <= 0.0 || value > 1.0 {
            self.reject(field, "must be greater than 0 and at most 1");
        }
        self
    }

    pub fn int_greater_than(&mut self, field: &str, value: i64, bound: i64) -> &mut Self {
        if value <= bound {
            self.reject(field, format!("must be greater than {bound}"));
        }
        self
    }

    pub fn int_at_least(&mut self, field: &str, value: i64, bound: i64) -> &mut Self {
        if value < bound {
            self.reject(field, format!("must be greater than or equal to {bound}"));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: std::mem::take(&mut self.errors),
            })
        }
    }
}
