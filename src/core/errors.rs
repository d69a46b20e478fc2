//! Shared error types for the engine.

use std::fmt;
use thiserror::Error;

/// A single field-level problem found while validating raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the offending field, e.g. `costs[2].amount`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main error type for toolcost operations.
///
/// Undefined metrics are not errors (they are `None` in `MetricResult`);
/// this type covers input that violates the data model's invariants and
/// misuse of the comparison API.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw input failed validation; carries every problem found, not just
    /// the first.
    #[error("profile validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// `compare` was called with no profiles.
    #[error("at least one tool profile is required for comparison")]
    EmptyComparison,

    /// Configuration file errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
