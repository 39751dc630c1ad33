//! Errors for REST calls against the case-management API.
//!
//! ERROR HANDLING
//! ==============
//! HTTP failures keep the status and raw body so callers can present their own
//! message (a 401 on login is "invalid credentials", not a generic failure).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A 401 could not be recovered by refreshing; the session is gone.
    #[error("session expired, sign in again")]
    SessionExpired,

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials or token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Whether the user has to sign in again before retrying.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired) || self.is_unauthorized()
    }

    /// The response body parsed as JSON, when it is JSON.
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// The `detail` message the API attaches to most error responses.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        self.body_json()?
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }

    /// Whether the error body reports a problem with `field`.
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.body_json().is_some_and(|body| body.get(field).is_some())
    }
}
