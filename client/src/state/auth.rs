//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive snapshot of the session store. Storage itself is not reactive,
//! so every login, logout, and failed refresh re-syncs this signal; the route
//! guard and the layout re-render from it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::{AuthTransport, Claims, SessionStore, TokenStorage};

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays true until the browser has read the session; server
/// rendering never gets past it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<Claims>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Snapshot of `session`, or signed out when its token is not live.
    pub fn from_session<S: TokenStorage, T: AuthTransport>(session: &SessionStore<S, T>) -> Self {
        let user = if session.is_authenticated() { session.current_user() } else { None };
        Self { user, loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Display name for headers: `username`, or a neutral fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.username.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "me".to_owned())
    }
}
