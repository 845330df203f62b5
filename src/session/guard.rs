//! Navigation gating from locally decodable state.
//!
//! The verdict is recomputed on every navigation attempt and never cached:
//! a credential must be present, decode cleanly, and carry a subject kind
//! on the target view's allow-list. Every failure mode collapses to a
//! redirect to the login page — the guard fails closed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::claims::{self, Claims, SubjectKind};
use super::store::CredentialStore;

/// Subject kinds admitted to the hospital dashboard.
pub const HOSPITAL_VIEW: &[SubjectKind] = &[SubjectKind::Hospital];

/// Subject kinds admitted to the patient dashboard.
pub const PATIENT_VIEW: &[SubjectKind] = &[SubjectKind::Patient];

/// Outcome of a navigation attempt at a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteVerdict {
    /// The decoded claims may enter the view.
    Admitted(Claims),
    /// Send the visitor to the login page.
    Redirected,
}

/// Decide whether the held credential may enter a view.
pub fn admit(store: &dyn CredentialStore, allowed: &[SubjectKind]) -> RouteVerdict {
    let Some(credential) = store.load() else {
        return RouteVerdict::Redirected;
    };
    match claims::decode(&credential) {
        Ok(claims) if allowed.contains(&claims.kind) => RouteVerdict::Admitted(claims),
        Ok(_) | Err(_) => RouteVerdict::Redirected,
    }
}
