//! Error types for schema validation and store-level constraints.
//!
//! A candidate document either validates in full or is rejected in full;
//! rejection carries one user-facing message per violated field. Uniqueness
//! of `id`/`email` is enforced by the external document store, which reports
//! duplicates through [`SchemaError::ConstraintViolation`].

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single violated field: the wire-format field path (camelCase, dotted
/// for nested fields, e.g. `guardian.fatherContactNo`) and its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
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

/// Validation failure for a candidate document.
///
/// Collects every violated field rather than stopping at the first, so a
/// caller can report the full set of problems in one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validation error from a single field violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = FieldError>) {
        self.errors.extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Convert into `Ok(value)` when no field was violated.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{messages}")
    }
}

impl FromIterator<FieldError> for ValidationError {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Errors surfaced by the schema layer or by the external document store.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The candidate document violated one or more field rules.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A unique index (`id` or `email`) already holds this value. Detected
    /// by the external store at write time, not by the schema itself.
    #[error("{field} '{value}' already exists")]
    ConstraintViolation { field: String, value: String },
}

impl SchemaError {
    pub fn constraint_violation(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}
