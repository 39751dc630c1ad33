use super::claims::DecodeError;
use super::storage::StorageError;
use crate::net::error::ApiError;

/// Failures of session-changing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `refresh()` was called with no refresh token stored.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The API call failed; status and body are preserved.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server issued an access token the client cannot read.
    #[error("access token could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    /// The browser refused to persist the session.
    #[error("session could not be stored: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// The underlying API failure, if this error came from the network.
    #[must_use]
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}
