//! Field rule functions for the student record schema.
//!
//! Each function backs a `#[validate(custom(...))]` attribute on the
//! candidate DTOs and carries the exact user-facing message for its field.
//! Rules are pure predicate checks; none of them looks at any other field.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::students::{BloodGroup, Gender, StudentStatus};

static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

static DATE_OF_BIRTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif)$").expect("valid regex"));

fn rule_error(code: &'static str, message: impl Into<String>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into().into());
    error
}

/// First name must equal `uppercase(first char) + lowercase(rest)`.
pub fn validate_capitalized(value: &str) -> Result<(), ValidationError> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };
    let capitalized: String = first
        .to_uppercase()
        .chain(chars.flat_map(|c| c.to_lowercase()))
        .collect();
    if value == capitalized {
        Ok(())
    } else {
        Err(rule_error(
            "capitalized",
            format!("{value} is not capitalized format"),
        ))
    }
}

fn ten_digit(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if TEN_DIGITS.is_match(value) {
        Ok(())
    } else {
        Err(rule_error("ten_digit_contact", message))
    }
}

pub fn validate_contact_no(value: &str) -> Result<(), ValidationError> {
    ten_digit(value, "Contact number must be a 10-digit number")
}

pub fn validate_emergency_contact_no(value: &str) -> Result<(), ValidationError> {
    ten_digit(value, "Emergency contact number must be a 10-digit number")
}

pub fn validate_father_contact_no(value: &str) -> Result<(), ValidationError> {
    ten_digit(value, "Father's contact number must be a 10-digit number")
}

pub fn validate_mother_contact_no(value: &str) -> Result<(), ValidationError> {
    ten_digit(value, "Mother's contact number must be a 10-digit number")
}

pub fn validate_local_guardian_contact_no(value: &str) -> Result<(), ValidationError> {
    ten_digit(
        value,
        "Local guardian's contact number must be a 10-digit number",
    )
}

/// Shape check only; no calendar validity beyond `YYYY-MM-DD`.
pub fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if DATE_OF_BIRTH.is_match(value) {
        Ok(())
    } else {
        Err(rule_error(
            "date_format",
            "Date of birth must be in the format YYYY-MM-DD",
        ))
    }
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(rule_error("email", "Please provide a valid email address"))
    }
}

pub fn validate_profile_img(value: &str) -> Result<(), ValidationError> {
    if IMAGE_EXTENSION.is_match(value) {
        Ok(())
    } else {
        Err(rule_error(
            "image_format",
            "Profile image must be a valid image format (jpg, jpeg, png, gif)",
        ))
    }
}

pub fn validate_gender(value: &str) -> Result<(), ValidationError> {
    if Gender::parse(value).is_some() {
        Ok(())
    } else {
        Err(rule_error(
            "enum",
            format!("{value} is not a valid gender. Valid values are: male, female, or other"),
        ))
    }
}

pub fn validate_blood_group(value: &str) -> Result<(), ValidationError> {
    if BloodGroup::parse(value).is_some() {
        Ok(())
    } else {
        Err(rule_error(
            "enum",
            format!(
                "{value} is not a valid blood group. Valid values are: A+, A-, B+, B-, AB+, AB-, O+, O-"
            ),
        ))
    }
}

pub fn validate_status(value: &str) -> Result<(), ValidationError> {
    if StudentStatus::parse(value).is_some() {
        Ok(())
    } else {
        Err(rule_error(
            "enum",
            format!("{value} is not a valid status. Valid values are: active, blocked"),
        ))
    }
}
