//! # Rollbook Schema
//!
//! Document validation and model registration for student records.
//!
//! This crate ties the Rollbook workspace together: it takes a raw JSON
//! document, runs it through the full student record schema, and hands back
//! a normalized [`rollbook_models::Student`] ready for a persistence driver.
//! It also owns the process-wide model registry that binds the "Student"
//! model name to its collection and unique indexes.
//!
//! # Modules
//!
//! - [`document`]: the candidate-to-record validation pipeline
//! - [`registry`]: the startup-initialized model registry
//!
//! # Example
//!
//! ```ignore
//! use rollbook_schema::{StudentModel, register_student_model};
//!
//! register_student_model();
//! let student = StudentModel::validate(&doc)?;
//! ```

pub mod document;
pub mod registry;

// Re-export commonly used types at crate root
pub use document::validate_document;
pub use registry::{ModelInfo, ModelRegistry, StudentModel, register_student_model};
pub use rollbook_core::errors::{FieldError, SchemaError, ValidationError};
pub use rollbook_models::students::Student;
