use super::*;

#[test]
fn canonical_uuid_grouping_is_accepted() {
    assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
    assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
}

#[test]
fn truncated_or_regrouped_uuids_are_rejected() {
    assert!(!is_valid_uuid("550e8400-e29b-41d4-a716"));
    assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
    assert!(!is_valid_uuid("{550e8400-e29b-41d4-a716-446655440000}"));
    assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000g"));
    assert!(!is_valid_uuid(""));
}

#[test]
fn real_dates_in_iso_grouping_are_accepted() {
    assert!(is_valid_date("2025-04-27"));
    assert!(is_valid_date("2024-02-29"));
    assert!(is_valid_date("1990-01-01"));
}

#[test]
fn impossible_calendar_dates_are_rejected() {
    assert!(!is_valid_date("2025-02-30"));
    assert!(!is_valid_date("2025-13-01"));
    assert!(!is_valid_date("2023-02-29"));
}

#[test]
fn wrong_date_groupings_are_rejected() {
    assert!(!is_valid_date("04-27-2025"));
    assert!(!is_valid_date("2025-4-27"));
    assert!(!is_valid_date("2025/04/27"));
    assert!(!is_valid_date(""));
}

#[test]
fn json_documents_are_accepted() {
    assert!(is_valid_json(r#"{"name":"John"}"#));
    assert!(is_valid_json(r#"[1, 2, 3]"#));
    assert!(is_valid_json("null"));
}

#[test]
fn non_json_text_is_rejected() {
    assert!(!is_valid_json("{name: John}"));
    assert!(!is_valid_json(""));
    assert!(!is_valid_json("{\"unterminated\": "));
}
