//! Wire types for the authentication, registry and notification endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Username/password pair sent to `/auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Body of `/users/verify_otp/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub otp_code: &'a str,
}

/// Raw response of `/auth/login/` and `/users/verify_otp/`.
///
/// `access` is absent when the server asks for a second factor first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Map<String, Value>>,
    #[serde(default)]
    pub two_factor_required: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `/auth/refresh/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response of `/auth/refresh/`. A rotated `refresh` token may also be present
/// and is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshPayload {
    pub access: String,
}

/// A registry listing: either a bare array or a paginated envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing {
    Page {
        #[serde(default)]
        count: Option<u64>,
        results: Vec<Value>,
    },
    Plain(Vec<Value>),
}

impl Listing {
    /// The rows of the listing, whichever shape arrived.
    #[must_use]
    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Self::Page { results, .. } | Self::Plain(results) => results,
        }
    }

    /// Total row count reported by the server, or the row count itself.
    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Self::Page { count: Some(count), .. } => *count,
            Self::Page { results, count: None } | Self::Plain(results) => results.len() as u64,
        }
    }

    /// Rows decoded as `R`; rows of another shape are dropped with a debug log.
    #[must_use]
    pub fn decode_rows<R: DeserializeOwned>(self) -> Vec<R> {
        self.into_rows()
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    log::debug!("skipping undecodable row: {e}");
                    None
                }
            })
            .collect()
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::Plain(Vec::new())
    }
}

/// Importance of a notification as the server labels it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    #[serde(other)]
    Other,
}

/// One row of `/documents/notifications/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub level: NotificationLevel,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Best display label for a registry row.
///
/// Registries name their rows differently (`name`, `title`, `reference`, ...),
/// so the first present field in a fixed preference order wins.
#[must_use]
pub fn row_label(row: &Value) -> String {
    const LABEL_FIELDS: [&str; 7] =
        ["name", "title", "reference", "full_name", "username", "description", "action"];
    for field in LABEL_FIELDS {
        if let Some(text) = row.get(field).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return text.to_owned();
            }
        }
    }
    match (row.get("first_name").and_then(Value::as_str), row.get("last_name").and_then(Value::as_str)) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        _ => row
            .get("id")
            .map_or_else(|| "(unnamed)".to_owned(), |id| format!("#{}", id.to_string().trim_matches('"'))),
    }
}
