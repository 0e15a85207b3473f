use super::*;

fn admin_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "admin@acme.com".to_owned(),
        name: "Admin".to_owned(),
        role: Role::Admin,
    }
}

fn member_user() -> User {
    User {
        id: "u2".to_owned(),
        email: "member@acme.com".to_owned(),
        name: "Member".to_owned(),
        role: Role::User,
    }
}

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_authed());
    assert!(!state.is_admin());
    assert!(!state.user_loading);
}

#[test]
fn is_authed_tracks_token_across_set_unset_sequences() {
    let mut state = AuthState::default();
    for _ in 0..3 {
        state.apply_token(Some("abc123".to_owned()));
        assert!(state.is_authed());
        state.apply_token(None);
        assert!(!state.is_authed());
    }
}

#[test]
fn new_token_drops_previous_identity() {
    let mut state = AuthState::default();
    state.apply_token(Some("first".to_owned()));
    state.apply_identity(member_user());
    assert!(state.user.is_some());

    state.apply_token(Some("second".to_owned()));
    assert!(state.is_authed());
    assert!(state.user.is_none());
}

#[test]
fn is_admin_false_while_identity_unresolved() {
    let mut state = AuthState::default();
    state.apply_token(Some("abc123".to_owned()));
    state.begin_identity_fetch();
    assert!(state.is_authed());
    assert!(!state.is_admin());
}

#[test]
fn is_admin_reflects_resolved_role() {
    let mut state = AuthState::default();
    state.apply_token(Some("abc123".to_owned()));
    state.apply_identity(admin_user());
    assert!(state.is_admin());

    state.apply_token(Some("xyz789".to_owned()));
    state.apply_identity(member_user());
    assert!(!state.is_admin());
}

#[test]
fn identity_resolution_after_logout_is_ignored() {
    let mut state = AuthState::default();
    state.apply_token(Some("abc123".to_owned()));
    state.begin_identity_fetch();
    state.apply_logout();
    // The in-flight response arrives late; it must not resurrect a session.
    state.apply_identity(member_user());
    assert!(state.user.is_none());
    assert!(!state.is_authed());
}

#[test]
fn logout_is_idempotent() {
    let mut state = AuthState::default();
    state.apply_token(Some("abc123".to_owned()));
    state.apply_identity(member_user());

    state.apply_logout();
    let after_once = state.clone();
    state.apply_logout();

    assert_eq!(after_once.token, state.token);
    assert_eq!(after_once.user, state.user);
    assert_eq!(after_once.user_loading, state.user_loading);
    assert!(!state.is_authed());
}

#[test]
fn identity_fetch_fires_exactly_once_per_token() {
    // No session: never fire.
    assert!(!should_fetch_identity(None, None));
    // Fresh token: fire once.
    assert!(should_fetch_identity(None, Some("abc123")));
    // Same token already requested: do not fire again.
    assert!(!should_fetch_identity(Some("abc123"), Some("abc123")));
    // Token changed (re-login): re-arm.
    assert!(should_fetch_identity(Some("abc123"), Some("xyz789")));
}

#[test]
fn identity_fetch_lifecycle_clears_loading() {
    let mut state = AuthState::default();
    state.apply_token(Some("abc123".to_owned()));
    state.begin_identity_fetch();
    assert!(state.user_loading);
    state.apply_identity(member_user());
    assert!(!state.user_loading);
    assert_eq!(state.user, Some(member_user()));
}
