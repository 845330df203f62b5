use super::*;

#[test]
fn blank_to_none_maps_empty_to_absent() {
    assert_eq!(blank_to_none(""), None);
    assert_eq!(blank_to_none("555-123-4567").as_deref(), Some("555-123-4567"));
}

#[test]
fn empty_json_field_is_absent_not_invalid() {
    assert_eq!(json_or_absent(""), None);
}

#[test]
fn json_field_parses_into_a_document() {
    assert_eq!(
        json_or_absent(r#"{"name": "John"}"#),
        Some(serde_json::json!({"name": "John"}))
    );
}
