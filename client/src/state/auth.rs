//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` so guards wait for the initial `/api/auth/me`
/// round-trip before deciding to redirect.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record the outcome of the session lookup.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Display name for the sidebar user menu.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "Guest".to_owned(), |user| user.name.clone())
    }
}
