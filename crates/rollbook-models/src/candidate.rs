//! Candidate document shapes and their conversion into normalized records.
//!
//! A candidate mirrors the wire layout of a student document with every
//! field optional, so that required-ness can be reported with the schema's
//! own messages instead of a deserializer's. [`CandidateStudent::try_into_student`]
//! runs the full check: field rules via the `validator` derive, then
//! required-ness during assembly, collecting one message per violated field.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use rollbook_core::errors::{FieldError, ValidationError};

use crate::students::{
    BloodGroup, Gender, Guardian, LocalGuardian, Student, StudentStatus, UserName,
};

/// Candidate for the nested `name` sub-record.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateUserName {
    #[validate(
        length(max = 20, message = "First name cannot be more than 20 characters"),
        custom(function = crate::validation::validate_capitalized)
    )]
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    #[validate(length(max = 20, message = "Last name can not be more than 20 characters"))]
    pub last_name: Option<String>,
}

/// Candidate for the nested `guardian` sub-record.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateGuardian {
    pub father_name: Option<String>,
    pub father_occupation: Option<String>,
    #[validate(custom(function = crate::validation::validate_father_contact_no))]
    pub father_contact_no: Option<String>,
    pub mother_name: Option<String>,
    pub mother_occupation: Option<String>,
    #[validate(custom(function = crate::validation::validate_mother_contact_no))]
    pub mother_contact_no: Option<String>,
}

/// Candidate for the nested `localGuardian` sub-record.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateLocalGuardian {
    pub name: Option<String>,
    pub occupation: Option<String>,
    #[validate(custom(function = crate::validation::validate_local_guardian_contact_no))]
    pub contact_no: Option<String>,
    pub address: Option<String>,
}

/// A raw student document as received from a caller.
///
/// Unknown fields are ignored, matching the document store's behavior of
/// persisting only declared paths.
#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateStudent {
    pub id: Option<String>,
    #[validate(nested)]
    pub name: Option<CandidateUserName>,
    #[validate(custom(function = crate::validation::validate_gender))]
    pub gender: Option<String>,
    #[validate(custom(function = crate::validation::validate_date_of_birth))]
    pub date_of_birth: Option<String>,
    #[validate(custom(function = crate::validation::validate_email))]
    pub email: Option<String>,
    #[validate(custom(function = crate::validation::validate_contact_no))]
    pub contact_no: Option<String>,
    #[validate(custom(function = crate::validation::validate_emergency_contact_no))]
    pub emergency_contact_no: Option<String>,
    #[validate(custom(function = crate::validation::validate_blood_group))]
    pub blood_group: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    #[validate(nested)]
    pub guardian: Option<CandidateGuardian>,
    #[validate(nested)]
    pub local_guardian: Option<CandidateLocalGuardian>,
    #[validate(custom(function = crate::validation::validate_profile_img))]
    pub profile_img: Option<String>,
    #[validate(custom(function = crate::validation::validate_status))]
    pub is_active: Option<String>,
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim().to_string();
    *value = trimmed;
}

impl CandidateUserName {
    fn normalize(&mut self) {
        if let Some(first_name) = self.first_name.as_mut() {
            trim_in_place(first_name);
        }
        if let Some(middle_name) = self.middle_name.as_mut() {
            trim_in_place(middle_name);
        }
        if let Some(last_name) = self.last_name.as_mut() {
            trim_in_place(last_name);
        }
    }
}

impl CandidateStudent {
    /// Trim the fields the schema declares as trimmed (name parts, email).
    /// Runs before validation, so rules see the stored form of each value.
    pub fn normalize(&mut self) {
        if let Some(name) = self.name.as_mut() {
            name.normalize();
        }
        if let Some(email) = self.email.as_mut() {
            trim_in_place(email);
        }
    }

    /// Validate the candidate in full and assemble the normalized record.
    ///
    /// All violations are collected; a field missing its value reports the
    /// schema's required message and suppresses any rule message for the
    /// same field, so every violated field surfaces exactly one message.
    pub fn try_into_student(self) -> Result<Student, ValidationError> {
        let rule_errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut flat = flatten_rule_errors("", &errors);
                flat.sort_by(|a, b| a.field.cmp(&b.field));
                flat
            }
        };

        let mut errors = ValidationError::new();

        let id = required(self.id, "id", "Student ID is required", &mut errors);
        let name = match self.name {
            Some(name) => {
                let first_name = required(
                    name.first_name,
                    "name.firstName",
                    "First name is required and cannot be empty",
                    &mut errors,
                );
                let last_name = required(
                    name.last_name,
                    "name.lastName",
                    "Last name is required and cannot be empty",
                    &mut errors,
                );
                match (first_name, last_name) {
                    (Some(first_name), Some(last_name)) => Some(UserName {
                        first_name,
                        middle_name: name.middle_name.filter(|m| !m.is_empty()),
                        last_name,
                    }),
                    _ => None,
                }
            }
            None => {
                errors.push(FieldError::new("name", "Student name is required"));
                None
            }
        };
        let gender = required(self.gender, "gender", "Gender is required", &mut errors)
            .and_then(|v| Gender::parse(&v));
        let date_of_birth = required(
            self.date_of_birth,
            "dateOfBirth",
            "Date of birth is required",
            &mut errors,
        );
        let email = required(self.email, "email", "Email address is required", &mut errors);
        let contact_no = required(
            self.contact_no,
            "contactNo",
            "Contact number is required",
            &mut errors,
        );
        let emergency_contact_no = required(
            self.emergency_contact_no,
            "emergencyContactNo",
            "Emergency contact number is required",
            &mut errors,
        );
        let blood_group = self.blood_group.as_deref().and_then(BloodGroup::parse);
        let present_address = required(
            self.present_address,
            "presentAddress",
            "Present address is required",
            &mut errors,
        );
        let permanent_address = required(
            self.permanent_address,
            "permanentAddress",
            "Permanent address is required",
            &mut errors,
        );
        let guardian = match self.guardian {
            Some(guardian) => assemble_guardian(guardian, &mut errors),
            None => {
                errors.push(FieldError::new("guardian", "Guardian details are required"));
                None
            }
        };
        let local_guardian = match self.local_guardian {
            Some(local) => assemble_local_guardian(local, &mut errors),
            None => {
                errors.push(FieldError::new(
                    "localGuardian",
                    "Local guardian details are required",
                ));
                None
            }
        };
        let is_active = self
            .is_active
            .as_deref()
            .and_then(StudentStatus::parse)
            .unwrap_or_default();

        // Required-ness wins over rule messages for the same field
        let required_fields: Vec<String> =
            errors.errors.iter().map(|e| e.field.clone()).collect();
        errors.extend(
            rule_errors
                .into_iter()
                .filter(|rule| !required_fields.contains(&rule.field)),
        );
        let errors = first_message_per_field(errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        let (
            Some(id),
            Some(name),
            Some(gender),
            Some(date_of_birth),
            Some(email),
            Some(contact_no),
            Some(emergency_contact_no),
            Some(present_address),
            Some(permanent_address),
            Some(guardian),
            Some(local_guardian),
        ) = (
            id,
            name,
            gender,
            date_of_birth,
            email,
            contact_no,
            emergency_contact_no,
            present_address,
            permanent_address,
            guardian,
            local_guardian,
        )
        else {
            return Err(errors);
        };

        Ok(Student {
            id,
            name,
            gender,
            date_of_birth,
            email,
            contact_no,
            emergency_contact_no,
            blood_group,
            present_address,
            permanent_address,
            guardian,
            local_guardian,
            profile_img: self.profile_img.filter(|p| !p.is_empty()),
            is_active,
        })
    }
}

fn assemble_guardian(
    guardian: CandidateGuardian,
    errors: &mut ValidationError,
) -> Option<Guardian> {
    let father_name = required(
        guardian.father_name,
        "guardian.fatherName",
        "Father's name is required",
        errors,
    );
    let father_occupation = required(
        guardian.father_occupation,
        "guardian.fatherOccupation",
        "Father's occupation is required",
        errors,
    );
    let father_contact_no = required(
        guardian.father_contact_no,
        "guardian.fatherContactNo",
        "Father's contact number is required",
        errors,
    );
    let mother_name = required(
        guardian.mother_name,
        "guardian.motherName",
        "Mother's name is required",
        errors,
    );
    let mother_occupation = required(
        guardian.mother_occupation,
        "guardian.motherOccupation",
        "Mother's occupation is required",
        errors,
    );
    let mother_contact_no = required(
        guardian.mother_contact_no,
        "guardian.motherContactNo",
        "Mother's contact number is required",
        errors,
    );

    match (
        father_name,
        father_occupation,
        father_contact_no,
        mother_name,
        mother_occupation,
        mother_contact_no,
    ) {
        (
            Some(father_name),
            Some(father_occupation),
            Some(father_contact_no),
            Some(mother_name),
            Some(mother_occupation),
            Some(mother_contact_no),
        ) => Some(Guardian {
            father_name,
            father_occupation,
            father_contact_no,
            mother_name,
            mother_occupation,
            mother_contact_no,
        }),
        _ => None,
    }
}

fn assemble_local_guardian(
    local: CandidateLocalGuardian,
    errors: &mut ValidationError,
) -> Option<LocalGuardian> {
    let name = required(
        local.name,
        "localGuardian.name",
        "Local guardian's name is required",
        errors,
    );
    let occupation = required(
        local.occupation,
        "localGuardian.occupation",
        "Local guardian's occupation is required",
        errors,
    );
    let contact_no = required(
        local.contact_no,
        "localGuardian.contactNo",
        "Local guardian's contact number is required",
        errors,
    );
    let address = required(
        local.address,
        "localGuardian.address",
        "Local guardian's address is required",
        errors,
    );

    match (name, occupation, contact_no, address) {
        (Some(name), Some(occupation), Some(contact_no), Some(address)) => Some(LocalGuardian {
            name,
            occupation,
            contact_no,
            address,
        }),
        _ => None,
    }
}

/// Absent, null, or empty values fail required-ness with the field's own
/// message; anything else passes through for the rule checks.
fn required(
    value: Option<String>,
    field: &'static str,
    message: &'static str,
    errors: &mut ValidationError,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

/// Flatten the `validator` derive's nested error tree into wire-format
/// field paths (`guardian.fatherContactNo`).
fn flatten_rule_errors(prefix: &str, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flat = Vec::new();
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            snake_to_camel(field.as_ref())
        } else {
            format!("{prefix}.{}", snake_to_camel(field.as_ref()))
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    flat.push(FieldError::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flat.extend(flatten_rule_errors(&path, nested));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flat.extend(flatten_rule_errors(&format!("{path}[{index}]"), nested));
                }
            }
        }
    }
    flat
}

/// Keep the first message recorded for each field path.
fn first_message_per_field(errors: ValidationError) -> ValidationError {
    let mut seen: Vec<String> = Vec::new();
    errors
        .errors
        .into_iter()
        .filter(|e| {
            if seen.iter().any(|f| f == &e.field) {
                false
            } else {
                seen.push(e.field.clone());
                true
            }
        })
        .collect()
}

fn snake_to_camel(field: &str) -> String {
    let mut parts = field.split('_');
    let mut camel = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}
