//! Build-time client configuration.
//!
//! The API base is baked into the WASM bundle: set `LEXDESK_API_URL` when
//! building to point the client at a backend on another origin. The default
//! `/api` goes through the host's same-origin proxy.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const APP_NAME: &str = "LexDesk";

/// Base URL of the REST API, without a trailing slash.
#[must_use]
pub fn api_base() -> &'static str {
    let base = option_env!("LEXDESK_API_URL").unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/')
}

/// Join an API base and an endpoint path with exactly one slash between them.
#[must_use]
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for `path` under [`api_base`].
#[must_use]
pub fn api_url(path: &str) -> String {
    endpoint_url(api_base(), path)
}
