use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_has_no_session() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_default_is_not_loading() {
    let state = SessionState::default();
    assert!(!state.loading);
    assert!(state.last_error.is_none());
}

#[test]
fn studio_policy_requires_admin_accounts() {
    assert!(!STUDIO_POLICY.permits(false));
    assert!(STUDIO_POLICY.permits(true));
}
