//! End-to-end validation of student documents against the registered schema.

use serde_json::{Value, json};

use rollbook_schema::registry::{ModelRegistry, StudentModel, register_student_model};
use rollbook_schema::{ValidationError, validate_document};
use rollbook_models::students::{BloodGroup, Gender, StudentStatus};

fn valid_document() -> Value {
    json!({
        "id": "S-1001",
        "name": {
            "firstName": "Jane",
            "middleName": "Q",
            "lastName": "Doe"
        },
        "gender": "female",
        "dateOfBirth": "2001-05-10",
        "email": "jane.doe@example.com",
        "contactNo": "9876543210",
        "emergencyContactNo": "9123456780",
        "bloodGroup": "O+",
        "presentAddress": "12 Lakeside Ave",
        "permanentAddress": "44 Hillcrest Rd",
        "guardian": {
            "fatherName": "John Doe",
            "fatherOccupation": "Engineer",
            "fatherContactNo": "9000000001",
            "motherName": "Mary Doe",
            "motherOccupation": "Teacher",
            "motherContactNo": "9000000002"
        },
        "localGuardian": {
            "name": "Sam Smith",
            "occupation": "Shopkeeper",
            "contactNo": "9000000003",
            "address": "7 Market St"
        },
        "profileImg": "jane.png",
        "isActive": "active"
    })
}

fn messages_for<'a>(error: &'a ValidationError, field: &str) -> Vec<&'a str> {
    error
        .errors
        .iter()
        .filter(|e| e.field == field)
        .map(|e| e.message.as_str())
        .collect()
}

#[test]
fn valid_document_passes_in_full() {
    let student = validate_document(&valid_document()).unwrap();
    assert_eq!(student.id, "S-1001");
    assert_eq!(student.name.first_name, "Jane");
    assert_eq!(student.name.middle_name.as_deref(), Some("Q"));
    assert_eq!(student.gender, Gender::Female);
    assert_eq!(student.blood_group, Some(BloodGroup::OPositive));
    assert_eq!(student.is_active, StudentStatus::Active);
}

#[test]
fn model_handle_validates_documents() {
    let student = StudentModel::validate(&valid_document()).unwrap();
    assert_eq!(student.email, "jane.doe@example.com");
}

#[test]
fn lowercase_and_uppercase_first_names_fail() {
    for bad in ["john", "JOHN"] {
        let mut doc = valid_document();
        doc["name"]["firstName"] = json!(bad);
        let error = validate_document(&doc).unwrap_err();
        assert_eq!(
            messages_for(&error, "name.firstName"),
            vec![format!("{bad} is not capitalized format")],
            "expected capitalization failure for {bad:?}"
        );
    }
}

#[test]
fn contact_numbers_must_be_exactly_ten_digits() {
    for bad in ["12345", "12345678a0", "98765432100"] {
        let mut doc = valid_document();
        doc["contactNo"] = json!(bad);
        let error = validate_document(&doc).unwrap_err();
        assert_eq!(
            messages_for(&error, "contactNo"),
            vec!["Contact number must be a 10-digit number"],
            "expected rejection for {bad:?}"
        );
    }

    let mut doc = valid_document();
    doc["contactNo"] = json!("9876543210");
    assert!(validate_document(&doc).is_ok());
}

#[test]
fn nested_contact_numbers_are_checked_too() {
    let mut doc = valid_document();
    doc["guardian"]["motherContactNo"] = json!("555");
    doc["localGuardian"]["contactNo"] = json!("555");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "guardian.motherContactNo"),
        vec!["Mother's contact number must be a 10-digit number"]
    );
    assert_eq!(
        messages_for(&error, "localGuardian.contactNo"),
        vec!["Local guardian's contact number must be a 10-digit number"]
    );
}

#[test]
fn date_of_birth_requires_iso_shape() {
    let mut doc = valid_document();
    doc["dateOfBirth"] = json!("2001-05-10");
    assert!(validate_document(&doc).is_ok());

    for bad in ["05-10-2001", "2001/05/10"] {
        let mut doc = valid_document();
        doc["dateOfBirth"] = json!(bad);
        let error = validate_document(&doc).unwrap_err();
        assert_eq!(
            messages_for(&error, "dateOfBirth"),
            vec!["Date of birth must be in the format YYYY-MM-DD"],
            "expected rejection for {bad:?}"
        );
    }
}

#[test]
fn email_shape_is_enforced() {
    let mut doc = valid_document();
    doc["email"] = json!("a@b.co");
    assert!(validate_document(&doc).is_ok());

    let mut doc = valid_document();
    doc["email"] = json!("a@b");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "email"),
        vec!["Please provide a valid email address"]
    );
}

#[test]
fn invalid_gender_names_the_offending_value() {
    let mut doc = valid_document();
    doc["gender"] = json!("unknown");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "gender"),
        vec!["unknown is not a valid gender. Valid values are: male, female, or other"]
    );
}

#[test]
fn invalid_blood_group_names_the_offending_value() {
    let mut doc = valid_document();
    doc["bloodGroup"] = json!("C+");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "bloodGroup"),
        vec!["C+ is not a valid blood group. Valid values are: A+, A-, B+, B-, AB+, AB-, O+, O-"]
    );
}

#[test]
fn omitted_is_active_defaults_to_active() {
    let mut doc = valid_document();
    doc.as_object_mut().unwrap().remove("isActive");
    let student = validate_document(&doc).unwrap();
    assert_eq!(student.is_active, StudentStatus::Active);
}

#[test]
fn profile_image_extension_is_case_insensitive() {
    let mut doc = valid_document();
    doc["profileImg"] = json!("pic.PNG");
    assert!(validate_document(&doc).is_ok());

    let mut doc = valid_document();
    doc["profileImg"] = json!("pic.bmp");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "profileImg"),
        vec!["Profile image must be a valid image format (jpg, jpeg, png, gif)"]
    );
}

#[test]
fn omitting_guardian_reports_its_required_message() {
    let mut doc = valid_document();
    doc.as_object_mut().unwrap().remove("guardian");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "guardian"),
        vec!["Guardian details are required"]
    );
}

#[test]
fn every_missing_required_field_gets_its_own_message() {
    let mut doc = valid_document();
    {
        let doc = doc.as_object_mut().unwrap();
        doc.remove("id");
        doc.remove("presentAddress");
    }
    doc["name"].as_object_mut().unwrap().remove("lastName");

    let error = validate_document(&doc).unwrap_err();
    assert_eq!(messages_for(&error, "id"), vec!["Student ID is required"]);
    assert_eq!(
        messages_for(&error, "presentAddress"),
        vec!["Present address is required"]
    );
    assert_eq!(
        messages_for(&error, "name.lastName"),
        vec!["Last name is required and cannot be empty"]
    );
    assert_eq!(error.len(), 3);
}

#[test]
fn missing_and_invalid_fields_are_reported_together() {
    let mut doc = valid_document();
    doc.as_object_mut().unwrap().remove("email");
    doc["emergencyContactNo"] = json!("123");
    let error = validate_document(&doc).unwrap_err();
    assert_eq!(
        messages_for(&error, "email"),
        vec!["Email address is required"]
    );
    assert_eq!(
        messages_for(&error, "emergencyContactNo"),
        vec!["Emergency contact number must be a 10-digit number"]
    );
}

#[test]
fn whitespace_name_and_email_are_trimmed_before_validation() {
    let mut doc = valid_document();
    doc["name"]["firstName"] = json!("  Jane  ");
    doc["email"] = json!(" jane.doe@example.com ");
    let student = validate_document(&doc).unwrap();
    assert_eq!(student.name.first_name, "Jane");
    assert_eq!(student.email, "jane.doe@example.com");
}

#[test]
fn registration_makes_the_student_model_resolvable() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let info = register_student_model();
    assert_eq!(info.name, "Student");
    assert_eq!(
        ModelRegistry::global().collection_for("Student"),
        Some("students")
    );
    assert_eq!(info.unique_fields, ["id", "email"].as_slice());
}
