use super::*;

#[test]
fn endpoint_url_inserts_single_slash() {
    assert_eq!(endpoint_url("/api", "auth/login/"), "/api/auth/login/");
    assert_eq!(endpoint_url("/api/", "/auth/login/"), "/api/auth/login/");
    assert_eq!(
        endpoint_url("https://cabinet.example/api", "/auth/refresh/"),
        "https://cabinet.example/api/auth/refresh/"
    );
}

#[test]
fn endpoint_url_keeps_trailing_slash_of_path() {
    assert!(endpoint_url("/api", "/documents/clients/").ends_with("/clients/"));
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn api_url_uses_configured_base() {
    assert_eq!(api_url("/users/me/"), format!("{}/users/me/", api_base()));
}
