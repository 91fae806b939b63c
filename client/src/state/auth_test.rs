use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: Some("ada@example.com".to_owned()),
        avatar_url: None,
    }
}

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn resolve_with_user_signs_in() {
    let mut state = AuthState::default();
    state.resolve(Some(user()));
    assert!(!state.loading);
    assert!(state.is_signed_in());
    assert_eq!(state.display_name(), "Ada");
}

#[test]
fn resolve_without_user_finishes_loading() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
    assert_eq!(state.display_name(), "Guest");
}
