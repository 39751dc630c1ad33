use super::*;

fn status(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, body: body.to_owned() }
}

#[test]
fn status_is_reported_only_for_http_failures() {
    assert_eq!(status(404, "").status(), Some(404));
    assert_eq!(ApiError::Transport("offline".into()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn is_unauthorized_matches_401_only() {
    assert!(status(401, "").is_unauthorized());
    assert!(!status(403, "").is_unauthorized());
    assert!(!ApiError::Decode("x".into()).is_unauthorized());
}

#[test]
fn detail_reads_json_detail_field() {
    let err = status(400, r#"{"detail":"Compte désactivé."}"#);
    assert_eq!(err.detail().as_deref(), Some("Compte désactivé."));
}

#[test]
fn detail_is_none_for_non_json_body() {
    assert_eq!(status(500, "<html>oops</html>").detail(), None);
}

#[test]
fn has_field_error_checks_body_keys() {
    let err = status(400, r#"{"otp_code":["Code invalide"]}"#);
    assert!(err.has_field_error("otp_code"));
    assert!(!err.has_field_error("username"));
}

#[test]
fn display_includes_status() {
    assert_eq!(status(502, "").to_string(), "server responded with status 502");
}

#[test]
fn requires_login_for_expired_session_and_401() {
    assert!(ApiError::SessionExpired.requires_login());
    assert!(status(401, "").requires_login());
    assert!(!status(500, "").requires_login());
    assert!(!ApiError::Transport("offline".into()).requires_login());
}
