use super::*;
use crate::session::{Claims, Role};

#[test]
fn visitors_are_sent_to_login() {
    assert_eq!(call_to_action(&AuthState::default()), ("Sign in", LOGIN_PATH));
}

#[test]
fn signed_in_users_go_to_dashboard() {
    let user = Claims { username: "ndiaye".into(), role: Role::Lawyer, ..Claims::default() };
    let auth = AuthState { user: Some(user), loading: false };
    assert_eq!(call_to_action(&auth).1, HOME_PATH);
}
