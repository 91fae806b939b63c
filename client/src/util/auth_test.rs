use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: None,
            avatar_url: None,
        }),
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_signed_in(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn signed_in_user_is_forwarded_from_login() {
    assert!(should_redirect_signed_in(&signed_in()));
}
