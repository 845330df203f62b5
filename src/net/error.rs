//! Failure taxonomy for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// How a backend call failed.
///
/// The three-way split is load-bearing: `Unauthorized` logs the user out,
/// `Rejected` is shown next to the offending form, `Unreachable` is a
/// generic retry-able message. Collapsing them loses the distinction
/// between "log the user out" and "show a form error".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401: the held credential is stale or absent.
    #[error("session expired or invalid")]
    Unauthorized,
    /// The backend rejected the request with a structured reason.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed: network failure or a broken response.
    #[error("could not reach the server: {0}")]
    Unreachable(String),
}

impl ApiError {
    /// Stub result for builds without a browser transport.
    #[cfg(not(feature = "hydrate"))]
    pub(crate) fn offline() -> Self {
        Self::Unreachable("not available on server".to_owned())
    }
}

/// Extract a human-readable message from a backend error body.
///
/// The backend emits `{"detail": "..."}` for business errors and
/// `{"detail": [{"msg": "..."}, ...]}` for validation errors; the array
/// form is joined with `"; "` and may contain nulls to skip. Anything else
/// yields `None` and the caller falls back to a status-line message.
pub fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}
