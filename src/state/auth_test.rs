use super::*;

#[test]
fn auth_state_default_has_no_claims() {
    let state = AuthState::default();
    assert!(state.claims.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}
