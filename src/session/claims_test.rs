use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

#[test]
fn decodes_hospital_claims() {
    let claims = decode(&token(&serde_json::json!({
        "sub": "b4c1a1f0-0000-0000-0000-000000000001",
        "type": "hospital",
        "exp": 1_777_000_000u64,
    })))
    .expect("well-formed token");

    assert_eq!(claims.sub, "b4c1a1f0-0000-0000-0000-000000000001");
    assert_eq!(claims.kind, SubjectKind::Hospital);
    assert_eq!(claims.exp, 1_777_000_000);
}

#[test]
fn decodes_patient_and_user_kinds() {
    let patient = decode(&token(&serde_json::json!({
        "sub": "p-1", "type": "patient", "exp": 1u64,
    })))
    .expect("patient token");
    assert_eq!(patient.kind, SubjectKind::Patient);

    let user = decode(&token(&serde_json::json!({
        "sub": "u-1", "type": "user", "exp": 1u64,
    })))
    .expect("user token");
    assert_eq!(user.kind, SubjectKind::User);
}

#[test]
fn unknown_subject_kind_is_an_error_not_a_default() {
    let result = decode(&token(&serde_json::json!({
        "sub": "x-1", "type": "superuser", "exp": 1u64,
    })));
    assert_eq!(result, Err(DecodeError::Claims));
}

#[test]
fn wrong_segment_count_is_rejected() {
    assert_eq!(decode("only-one-segment"), Err(DecodeError::Shape));
    assert_eq!(decode("two.segments"), Err(DecodeError::Shape));
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::Shape));
    assert_eq!(decode(""), Err(DecodeError::Shape));
}

#[test]
fn invalid_base64_payload_is_rejected() {
    assert_eq!(decode("header.!!!.signature"), Err(DecodeError::Encoding));
}

#[test]
fn non_json_payload_is_rejected() {
    let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
    assert_eq!(
        decode(&format!("h.{payload}.s")),
        Err(DecodeError::Claims)
    );
}

#[test]
fn missing_claim_fields_are_rejected() {
    let result = decode(&token(&serde_json::json!({ "type": "hospital" })));
    assert_eq!(result, Err(DecodeError::Claims));
}

#[test]
fn grant_values_round_trip() {
    for kind in [SubjectKind::Hospital, SubjectKind::Patient, SubjectKind::User] {
        assert_eq!(SubjectKind::from_grant(kind.as_grant()), Some(kind));
    }
    assert_eq!(SubjectKind::from_grant("admin"), None);
}

#[test]
fn landing_paths_match_the_route_table() {
    assert_eq!(SubjectKind::Hospital.landing_path(), "/hospitals");
    assert_eq!(SubjectKind::Patient.landing_path(), "/patients");
    assert_eq!(SubjectKind::User.landing_path(), "/users");
}
