//! Candidate document validation pipeline.
//!
//! A document either fully validates or is rejected in full; rejection
//! carries one message per violated field. The pipeline is synchronous and
//! side-effect free: deserialize the candidate shape, trim the declared
//! fields, then run the rule and required-ness checks in one pass.

use serde_json::Value;
use tracing::debug;

use rollbook_core::errors::ValidationError;
use rollbook_models::candidate::CandidateStudent;
use rollbook_models::students::Student;

/// Validate a raw JSON document against the student record schema.
///
/// On success the returned [`Student`] is normalized: name parts and email
/// trimmed, enum fields parsed, and `isActive` defaulted to `active`.
pub fn validate_document(document: &Value) -> Result<Student, ValidationError> {
    let mut candidate: CandidateStudent =
        serde_json::from_value(document.clone()).map_err(map_deserialize_error)?;
    candidate.normalize();
    let student = candidate.try_into_student()?;
    debug!(id = %student.id, "student document validated");
    Ok(student)
}

/// Candidate fields are all optional, so deserialization only fails when a
/// present field has the wrong JSON type (or the document is not an object).
fn map_deserialize_error(error: serde_json::Error) -> ValidationError {
    let text = error.to_string();
    if text.contains("invalid type") {
        ValidationError::single("document", "Invalid field type in document")
    } else {
        ValidationError::single("document", "Invalid document body")
    }
}
