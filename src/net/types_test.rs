use super::*;

#[test]
fn patient_deserializes_backend_shape_and_ignores_audit_columns() {
    let body = r#"{
        "patient_id": "6f1b24a0-9e0f-4a52-93a1-2b57a9a3a111",
        "user_id": "550e8400-e29b-41d4-a716-446655440000",
        "unique_id": "2025-HOSP001-000001",
        "dob": "1990-01-01",
        "gender": "Male",
        "contact_phone": null,
        "emergency_contact": {"name": "John Doe", "phone": "555-987-6543"},
        "created_by_hospital_id": "b4c1a1f0-2f62-4d3a-8a35-7a9f26f1c222",
        "created_at": "2025-04-27T12:00:00",
        "updated_at": null
    }"#;

    let patient: Patient = serde_json::from_str(body).expect("backend patient shape");
    assert_eq!(patient.unique_id, "2025-HOSP001-000001");
    assert_eq!(patient.dob, NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"));
    assert_eq!(patient.gender.as_deref(), Some("Male"));
    assert!(patient.contact_phone.is_none());
    assert_eq!(
        patient.emergency_contact,
        Some(serde_json::json!({"name": "John Doe", "phone": "555-987-6543"}))
    );
}

#[test]
fn patient_update_serializes_explicit_nulls() {
    let update = PatientUpdate {
        gender: Some("Female".to_owned()),
        contact_phone: None,
        emergency_contact: None,
    };

    let body = serde_json::to_value(&update).expect("serializable");
    assert_eq!(
        body,
        serde_json::json!({
            "gender": "Female",
            "contact_phone": null,
            "emergency_contact": null
        })
    );
}

#[test]
fn test_result_list_deserializes() {
    let body = r#"[{
        "test_result_id": "0a4f3c9e-0d9f-4c5a-b1f2-0123456789ab",
        "patient_id": "6f1b24a0-9e0f-4a52-93a1-2b57a9a3a111",
        "test_type_id": "550e8400-e29b-41d4-a716-446655440000",
        "result": "Negative",
        "test_date": "2025-04-27",
        "created_by_hospital_id": "b4c1a1f0-2f62-4d3a-8a35-7a9f26f1c222"
    }]"#;

    let results: Vec<TestResult> = serde_json::from_str(body).expect("backend list shape");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].result, "Negative");
}

#[test]
fn token_response_deserializes() {
    let body = r#"{"access_token": "abc.def.ghi", "token_type": "bearer"}"#;
    let token: TokenResponse = serde_json::from_str(body).expect("token shape");
    assert_eq!(token.access_token, "abc.def.ghi");
    assert_eq!(token.token_type, "bearer");
}
