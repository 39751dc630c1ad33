use super::*;

fn status(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, body: body.to_owned() }
}

#[test]
fn default_is_loading() {
    assert!(Load::<u32>::default().is_loading());
}

#[test]
fn ok_result_is_ready() {
    assert_eq!(Load::from_result(Ok::<_, ApiError>(3)), Load::Ready(3));
}

#[test]
fn error_result_carries_message() {
    let load = Load::<u32>::from_result(Err(status(403, "")));
    assert_eq!(load, Load::Failed("You do not have access to this section.".to_owned()));
}

#[test]
fn server_detail_is_preferred_for_other_statuses() {
    assert_eq!(failure_message(&status(400, r#"{"detail":"Bad filter."}"#)), "Bad filter.");
    assert_eq!(failure_message(&status(500, "oops")), "Could not load data.");
}

#[test]
fn expired_session_and_network_failures() {
    assert!(failure_message(&ApiError::SessionExpired).contains("Sign in again"));
    assert_eq!(failure_message(&ApiError::Transport("x".into())), "The server could not be reached.");
}
