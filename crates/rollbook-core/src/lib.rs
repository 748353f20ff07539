//! # Rollbook Core
//!
//! Core types and errors for the Rollbook student record schema.
//!
//! This crate provides the foundational error types used throughout the
//! Rollbook workspace:
//!
//! - [`errors`]: per-field validation errors and store-level constraint
//!   violations
//!
//! # Example
//!
//! ```ignore
//! use rollbook_core::errors::{FieldError, ValidationError};
//!
//! let mut error = ValidationError::new();
//! error.push(FieldError::new("email", "Email address is required"));
//! assert!(!error.is_empty());
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{FieldError, SchemaError, ValidationError};
