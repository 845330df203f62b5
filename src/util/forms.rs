//! Small helpers for turning form strings into request fields.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Empty inputs become absent optional fields instead of empty strings.
pub fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Parse an optional JSON field. The empty string is absent (it bypasses
/// validation entirely); anything else is expected to have passed
/// [`crate::util::validate::is_valid_json`] already.
pub fn json_or_absent(value: &str) -> Option<serde_json::Value> {
    if value.is_empty() {
        return None;
    }
    serde_json::from_str(value).ok()
}
