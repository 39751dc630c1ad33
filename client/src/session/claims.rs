//! Access-token claims and decode-only JWT parsing.
//!
//! TRADE-OFFS
//! ==========
//! The browser never holds the signing key, so tokens are decoded without
//! signature verification. The server re-verifies every token it receives;
//! client-side claims only drive expiry checks and presentation.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// URL-safe base64 that accepts segments with or without `=` padding.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reasons an access token cannot be turned into [`Claims`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The token has no payload segment.
    #[error("token is not a three-part JWT")]
    Segments,

    /// The payload segment is not valid base64url.
    #[error("payload is not valid base64url: {0}")]
    Base64(String),

    /// The payload bytes are not a JSON claims object.
    #[error("payload is not a claims object: {0}")]
    Json(String),
}

/// Cabinet roles carried in the `role` claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[serde(rename = "AVOCAT")]
    Lawyer,
    #[serde(rename = "COLLABORATEUR")]
    Associate,
    #[serde(rename = "STAGIAIRE")]
    Intern,
    #[serde(rename = "SECRETAIRE")]
    Secretary,
    Client,
    /// Any role this build does not know about, or no role at all.
    #[default]
    #[serde(other)]
    Other,
}

impl Role {
    /// Human-readable label for headers and profile views.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Lawyer => "Lawyer",
            Self::Associate => "Associate",
            Self::Intern => "Intern",
            Self::Secretary => "Secretary",
            Self::Client => "Client",
            Self::Other => "Staff",
        }
    }
}

/// Decoded access-token claims, also persisted as the `user` storage entry.
///
/// Claims this type does not name are kept in `extra` so that the stored blob
/// round-trips everything the server issued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
    /// Expiry in epoch seconds. A token without `exp` never counts as live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Whether the token these claims came from is still valid at `now`.
    #[must_use]
    pub fn is_live_at(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp > now_secs)
    }

    /// Overlay a `user` object returned next to the tokens.
    ///
    /// Fields in `user` win over token claims with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if the merged object no longer fits the
    /// claims shape (for example a non-string `username`).
    pub fn merged_with(&self, user: &Map<String, Value>) -> Result<Self, DecodeError> {
        let mut merged = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => return Err(DecodeError::Json(e.to_string())),
        };
        merged.extend(user.iter().map(|(k, v)| (k.clone(), v.clone())));
        serde_json::from_value(Value::Object(merged)).map_err(|e| DecodeError::Json(e.to_string()))
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token has no payload segment, the
/// segment is not base64url, or the bytes are not a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let payload = token.split('.').nth(1).ok_or(DecodeError::Segments)?;
    if payload.is_empty() {
        return Err(DecodeError::Segments);
    }
    let bytes = SEGMENT_ENGINE
        .decode(payload)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))
}

/// Current wall-clock time in epoch seconds.
#[must_use]
pub fn now_epoch_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
