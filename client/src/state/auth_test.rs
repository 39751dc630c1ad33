use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::session::claims::now_epoch_secs;
use crate::session::storage::{ACCESS_TOKEN_KEY, USER_KEY};
use crate::session::{HttpAuthTransport, MemoryStorage, Role};

fn session_with(exp_offset: Option<i64>) -> SessionStore<MemoryStorage, HttpAuthTransport> {
    let session = SessionStore::new(MemoryStorage::new(), HttpAuthTransport::new("/api"));
    if let Some(offset) = exp_offset {
        let body = serde_json::json!({ "username": "khady", "role": "AVOCAT", "exp": now_epoch_secs() + offset });
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(body.to_string()));
        session.storage().set_item(ACCESS_TOKEN_KEY, &token).unwrap();
        session.storage().set_item(USER_KEY, &body.to_string()).unwrap();
    }
    session
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

#[test]
fn signed_out_is_settled() {
    let state = AuthState::signed_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================
// from_session
// =============================================================

#[test]
fn from_session_reads_live_session() {
    let state = AuthState::from_session(&session_with(Some(3600)));
    assert!(!state.loading);
    let user = state.user.unwrap();
    assert_eq!(user.username, "khady");
    assert_eq!(user.role, Role::Lawyer);
}

#[test]
fn from_session_drops_user_of_expired_session() {
    let state = AuthState::from_session(&session_with(Some(-5)));
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn from_session_without_tokens_is_signed_out() {
    assert_eq!(AuthState::from_session(&session_with(None)), AuthState::signed_out());
}

#[test]
fn display_name_falls_back_when_signed_out() {
    assert_eq!(AuthState::signed_out().display_name(), "me");
    assert_eq!(AuthState::from_session(&session_with(Some(60))).display_name(), "khady");
}
