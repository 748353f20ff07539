//! # Rollbook Models
//!
//! Domain models and validation rules for the Rollbook student record schema.
//!
//! This crate provides the data structures that make up a Student document,
//! the raw candidate shapes accepted from callers, and the field-level rules
//! that decide whether a candidate is fit for persistence.
//!
//! # Modules
//!
//! - [`students`]: the normalized `Student` entity, its nested sub-records,
//!   and the string-enum fields (gender, blood group, status)
//! - [`candidate`]: all-optional candidate DTOs mirroring the wire shape,
//!   with their conversion into a normalized [`students::Student`]
//! - [`validation`]: the field rule functions (capitalization, 10-digit
//!   contact numbers, date shape, email, image extension, enum membership)
//!
//! # Example
//!
//! ```ignore
//! use rollbook_models::candidate::CandidateStudent;
//!
//! let candidate: CandidateStudent = serde_json::from_value(doc)?;
//! let student = candidate.try_into_student()?;
//! ```

pub mod candidate;
pub mod students;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use candidate::{CandidateGuardian, CandidateLocalGuardian, CandidateStudent, CandidateUserName};
pub use students::{BloodGroup, Gender, Guardian, LocalGuardian, Student, StudentStatus, UserName};
