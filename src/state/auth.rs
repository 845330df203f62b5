#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::claims::Claims;

/// Authentication state tracking the decoded session claims.
///
/// Set by the route guard on admission, dropped on logout or 401. The
/// stored credential, not this struct, is the source of truth; this is a
/// render-friendly copy of its decoded claims.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub claims: Option<Claims>,
    pub loading: bool,
}
