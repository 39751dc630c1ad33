//! Route-guard decisions and session/signal sync helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. The
//! decision is re-made from the session store on every navigation and every
//! auth change; no destination is remembered for after login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::session::{AuthTransport, SessionStore, TokenStorage};
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// Outcome of evaluating a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The browser has not read the session yet (server render, hydration).
    Pending,
    /// Render the protected view.
    Admit,
    /// Do not render; navigate to the given path.
    Redirect(&'static str),
}

/// Decide whether a protected view may render.
///
/// `authenticated` is the store's live check, taken at render time.
#[must_use]
pub fn guard_decision(state: &AuthState, authenticated: bool) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if authenticated {
        GuardDecision::Admit
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// [`guard_decision`] as a memo over the auth signal and the current path.
///
/// Storage is not reactive, so the live check is re-run whenever either input
/// changes: every navigation re-reads the session even when the guarded
/// layout stays mounted.
pub fn guard_memo<S, T>(
    auth: RwSignal<AuthState>,
    path: Signal<String>,
    session: SessionStore<S, T>,
) -> Memo<GuardDecision>
where
    S: TokenStorage + 'static,
    T: AuthTransport + 'static,
{
    Memo::new(move |_| {
        path.track();
        guard_decision(&auth.get(), session.is_authenticated())
    })
}

/// Re-read the session into the auth signal.
pub fn sync_auth<S: TokenStorage, T: AuthTransport>(auth: RwSignal<AuthState>, session: &SessionStore<S, T>) {
    auth.set(AuthState::from_session(session));
}

/// Log out locally and publish the signed-out state.
pub fn sign_out<S: TokenStorage, T: AuthTransport>(auth: RwSignal<AuthState>, session: &SessionStore<S, T>) {
    session.logout();
    auth.set(AuthState::signed_out());
}
