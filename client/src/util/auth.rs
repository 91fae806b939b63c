//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and the
//! root component performs the one-time session lookup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a guarded route should bounce to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether the login route should forward an already signed-in user home.
#[must_use]
pub fn should_redirect_signed_in(state: &AuthState) -> bool {
    state.is_signed_in()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Resolve the current user once on mount. SSR leaves auth loading.
pub fn load_current_user(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        if user.is_none() {
            log::info!("no active session");
        }
        auth.update(|a| a.resolve(user));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
