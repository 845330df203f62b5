//! Pre-dispatch validation of free-text form fields.
//!
//! All three checks are total predicates: any input maps to a bool, nothing
//! panics. They run before a request body is built, so a failing field
//! never reaches the network layer.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use chrono::NaiveDate;

/// Canonical 8-4-4-4-12 hexadecimal UUID grouping, case-insensitive.
///
/// Braced, URN, and ungrouped forms the `uuid` crate would otherwise accept
/// are rejected; the backend only takes the canonical shape.
pub fn is_valid_uuid(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    let grouped =
        bytes[8] == b'-' && bytes[13] == b'-' && bytes[18] == b'-' && bytes[23] == b'-';
    grouped && uuid::Uuid::try_parse(value).is_ok()
}

/// Literal `YYYY-MM-DD` digit grouping that also denotes a real calendar
/// date: `2025-02-30` fails even though it matches the digit shape.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    digits && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Syntactically valid JSON text of any shape; no schema check beyond that.
/// The empty string is not JSON — empty optional fields bypass this check
/// entirely and are stored as absent.
pub fn is_valid_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}
