use super::*;

const USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
const HOSPITAL_ID: &str = "b4c1a1f0-2f62-4d3a-8a35-7a9f26f1c222";

fn filled_patient_draft() -> PatientDraft {
    PatientDraft {
        user_id: USER_ID.to_owned(),
        unique_id: "2025-HOSP001-000002".to_owned(),
        dob: "1990-01-01".to_owned(),
        gender: "Male".to_owned(),
        contact_phone: String::new(),
        emergency_contact: r#"{"name": "John Doe", "phone": "555-987-6543"}"#.to_owned(),
        created_by_hospital_id: HOSPITAL_ID.to_owned(),
    }
}

#[test]
fn patient_draft_converts_when_valid() {
    let body = filled_patient_draft().to_request().expect("valid draft");

    assert_eq!(body.user_id, USER_ID);
    assert_eq!(body.unique_id, "2025-HOSP001-000002");
    assert_eq!(body.gender.as_deref(), Some("Male"));
    assert!(body.contact_phone.is_none());
    assert_eq!(
        body.emergency_contact,
        Some(serde_json::json!({"name": "John Doe", "phone": "555-987-6543"}))
    );
}

#[test]
fn patient_draft_rejects_bad_user_id_first() {
    let draft = PatientDraft {
        user_id: "not-a-uuid".to_owned(),
        ..filled_patient_draft()
    };
    assert_eq!(
        draft.to_request(),
        Err("Invalid User ID format (must be UUID).".to_owned())
    );
}

#[test]
fn patient_draft_rejects_bad_hospital_id() {
    let draft = PatientDraft {
        created_by_hospital_id: "550e8400-e29b-41d4-a716".to_owned(),
        ..filled_patient_draft()
    };
    assert_eq!(
        draft.to_request(),
        Err("Invalid Hospital ID format (must be UUID).".to_owned())
    );
}

#[test]
fn patient_draft_rejects_impossible_birth_date() {
    let draft = PatientDraft {
        dob: "2025-02-30".to_owned(),
        ..filled_patient_draft()
    };
    assert_eq!(
        draft.to_request(),
        Err("Invalid Date of Birth format (use YYYY-MM-DD).".to_owned())
    );
}

#[test]
fn patient_draft_rejects_malformed_emergency_contact() {
    let draft = PatientDraft {
        emergency_contact: "{name: John}".to_owned(),
        ..filled_patient_draft()
    };
    assert_eq!(
        draft.to_request(),
        Err("Invalid Emergency Contact format (must be valid JSON).".to_owned())
    );
}

#[test]
fn empty_emergency_contact_bypasses_validation_and_is_absent() {
    let draft = PatientDraft {
        emergency_contact: String::new(),
        ..filled_patient_draft()
    };
    let body = draft.to_request().expect("empty contact is allowed");
    assert!(body.emergency_contact.is_none());
}

#[test]
fn test_result_draft_validates_in_form_order() {
    let mut draft = TestResultDraft {
        test_type_id: "nope".to_owned(),
        result: String::new(),
        test_date: "bad".to_owned(),
    };
    assert_eq!(
        draft.to_request(),
        Err("Invalid Test Type ID format (must be UUID).".to_owned())
    );

    draft.test_type_id = USER_ID.to_owned();
    assert_eq!(draft.to_request(), Err("Result cannot be empty.".to_owned()));

    draft.result = "Positive".to_owned();
    assert_eq!(
        draft.to_request(),
        Err("Invalid Test Date format (use YYYY-MM-DD).".to_owned())
    );

    draft.test_date = "2025-04-27".to_owned();
    let body = draft.to_request().expect("now valid");
    assert_eq!(body.result, "Positive");
}

#[test]
fn edit_draft_prefills_from_a_patient_record() {
    let patient: Patient = serde_json::from_value(serde_json::json!({
        "patient_id": "6f1b24a0-9e0f-4a52-93a1-2b57a9a3a111",
        "user_id": USER_ID,
        "unique_id": "2025-HOSP001-000001",
        "dob": "1990-01-01",
        "gender": "Female",
        "contact_phone": null,
        "emergency_contact": {"name": "Jane"},
        "created_by_hospital_id": HOSPITAL_ID,
    }))
    .expect("patient shape");

    let draft = EditDraft::from_patient(&patient);
    assert_eq!(draft.gender, "Female");
    assert_eq!(draft.contact_phone, "");
    assert_eq!(draft.emergency_contact, r#"{"name":"Jane"}"#);
}

#[test]
fn edit_draft_blank_fields_clear_values() {
    let update = EditDraft::default().to_request().expect("blank draft is valid");
    assert_eq!(update, PatientUpdate::default());
    assert_eq!(
        serde_json::to_value(&update).expect("serializable"),
        serde_json::json!({
            "gender": null,
            "contact_phone": null,
            "emergency_contact": null
        })
    );
}

#[test]
fn hospital_draft_requires_name_license_and_password() {
    let mut draft = HospitalDraft::default();
    assert_eq!(draft.to_request(), Err("Hospital name is required.".to_owned()));

    draft.name = "General Hospital".to_owned();
    assert_eq!(draft.to_request(), Err("License number is required.".to_owned()));

    draft.license_number = "HOSP001".to_owned();
    assert_eq!(draft.to_request(), Err("Password is required.".to_owned()));

    draft.password = "s3cret".to_owned();
    let body = draft.to_request().expect("now valid");
    assert_eq!(body.name, "General Hospital");
    assert_eq!(
        body.address,
        serde_json::json!({"street": "", "city": "", "state": "", "zip": ""})
    );
    assert!(body.contact_email.is_none());
}
