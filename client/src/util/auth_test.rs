use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use leptos::reactive::owner::Owner;

use super::*;
use crate::session::claims::now_epoch_secs;
use crate::session::storage::ACCESS_TOKEN_KEY;
use crate::session::{Claims, HttpAuthTransport, MemoryStorage};

type TestSession = SessionStore<MemoryStorage, HttpAuthTransport>;

fn live_session() -> TestSession {
    let session = SessionStore::new(MemoryStorage::new(), HttpAuthTransport::new("/api"));
    let body = serde_json::json!({ "username": "diop", "role": "AVOCAT", "exp": now_epoch_secs() + 3600 });
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(body.to_string()));
    session.storage().set_item(ACCESS_TOKEN_KEY, &token).unwrap();
    session
}

fn settled(user: Option<Claims>) -> AuthState {
    AuthState { user, loading: false }
}

#[test]
fn pending_while_session_not_read() {
    assert_eq!(guard_decision(&AuthState::default(), false), GuardDecision::Pending);
    assert_eq!(guard_decision(&AuthState::default(), true), GuardDecision::Pending);
}

#[test]
fn admits_authenticated_session() {
    assert_eq!(guard_decision(&settled(Some(Claims::default())), true), GuardDecision::Admit);
}

#[test]
fn redirects_to_login_when_unauthenticated() {
    assert_eq!(guard_decision(&settled(None), false), GuardDecision::Redirect("/login"));
}

#[test]
fn live_check_wins_over_stale_user_snapshot() {
    // The signal still holds a user, but the token has expired since.
    assert_eq!(guard_decision(&settled(Some(Claims::default())), false), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn home_path_is_dashboard() {
    assert_eq!(HOME_PATH, "/dashboard");
}

// =============================================================
// guard_memo
// =============================================================

#[test]
fn guard_rechecks_storage_on_navigation() {
    let owner = Owner::new();
    owner.set();

    let session = live_session();
    let auth = RwSignal::new(AuthState::from_session(&session));
    let path = RwSignal::new("/dashboard".to_owned());
    let decision = guard_memo(auth, path.into(), session.clone());
    assert_eq!(decision.get_untracked(), GuardDecision::Admit);

    // Token disappears mid-session; the auth signal is never re-synced.
    session.storage().remove_item(ACCESS_TOKEN_KEY);
    path.set("/clients".to_owned());

    assert_eq!(decision.get_untracked(), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn guard_follows_auth_signal() {
    let owner = Owner::new();
    owner.set();

    let session = live_session();
    let auth = RwSignal::new(AuthState::default());
    let path = RwSignal::new("/cases".to_owned());
    let decision = guard_memo(auth, path.into(), session.clone());
    assert_eq!(decision.get_untracked(), GuardDecision::Pending);

    sync_auth(auth, &session);
    assert_eq!(decision.get_untracked(), GuardDecision::Admit);

    sign_out(auth, &session);
    assert_eq!(decision.get_untracked(), GuardDecision::Redirect(LOGIN_PATH));
    assert!(session.access_token().is_none());
}
