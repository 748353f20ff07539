//! Student domain models.
//!
//! These are the normalized shapes that come out of a successful validation:
//! trimmed strings, parsed enum fields, and the `isActive` default applied.
//! The wire format is camelCase JSON, matching the document layout the
//! external store persists.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A student's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse the wire value, returning `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student's blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A+" => Some(Self::APositive),
            "A-" => Some(Self::ANegative),
            "B+" => Some(Self::BPositive),
            "B-" => Some(Self::BNegative),
            "AB+" => Some(Self::AbPositive),
            "AB-" => Some(Self::AbNegative),
            "O+" => Some(Self::OPositive),
            "O-" => Some(Self::ONegative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a student account is active or blocked.
///
/// Defaults to [`StudentStatus::Active`] when the candidate document omits
/// the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Blocked,
}

impl StudentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student's name, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

/// Parent guardian details. The whole record is required; partial guardian
/// info is never accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub father_name: String,
    pub father_occupation: String,
    pub father_contact_no: String,
    pub mother_name: String,
    pub mother_occupation: String,
    pub mother_contact_no: String,
}

/// Local guardian details, for students living away from their parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalGuardian {
    pub name: String,
    pub occupation: String,
    pub contact_no: String,
    pub address: String,
}

/// A validated, normalized student record, ready to hand to a persistence
/// driver.
///
/// `id` and `email` are globally unique; the external store owns those
/// indexes and reports duplicates at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: UserName,
    pub gender: Gender,
    pub date_of_birth: String,
    pub email: String,
    pub contact_no: String,
    pub emergency_contact_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    pub present_address: String,
    pub permanent_address: String,
    pub guardian: Guardian,
    pub local_guardian: LocalGuardian,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub is_active: StudentStatus,
}
