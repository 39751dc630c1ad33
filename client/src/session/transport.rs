//! Network seam for the authentication endpoints.
//!
//! `SessionStore` only talks to the server through [`AuthTransport`], so unit
//! tests can drive login and refresh with a scripted mock instead of HTTP.

use crate::config;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginPayload, RefreshPayload};

pub const LOGIN_PATH: &str = "/auth/login/";
pub const VERIFY_OTP_PATH: &str = "/users/verify_otp/";
pub const REFRESH_PATH: &str = "/auth/refresh/";

/// Authentication calls against the API. Futures are `?Send` because browser
/// fetch futures are bound to the UI thread.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport: Send + Sync {
    /// Exchange credentials for a token pair (`POST /auth/login/`).
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure untouched.
    async fn obtain_tokens(&self, credentials: &Credentials) -> Result<LoginPayload, ApiError>;

    /// Complete a two-factor login (`POST /users/verify_otp/`).
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure untouched.
    async fn verify_otp(&self, credentials: &Credentials, otp_code: &str) -> Result<LoginPayload, ApiError>;

    /// Trade a refresh token for a new access token (`POST /auth/refresh/`).
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure untouched.
    async fn refresh_access(&self, refresh_token: &str) -> Result<RefreshPayload, ApiError>;
}

/// [`AuthTransport`] over browser `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAuthTransport {
    base_url: String,
}

impl HttpAuthTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(feature = "hydrate")]
    fn url(&self, path: &str) -> String {
        config::endpoint_url(&self.base_url, path)
    }
}

impl Default for HttpAuthTransport {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

#[async_trait::async_trait(?Send)]
impl AuthTransport for HttpAuthTransport {
    async fn obtain_tokens(&self, credentials: &Credentials) -> Result<LoginPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            crate::net::http::post_json(&self.url(LOGIN_PATH), credentials, None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn verify_otp(&self, credentials: &Credentials, otp_code: &str) -> Result<LoginPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = crate::net::types::OtpRequest {
                username: &credentials.username,
                password: &credentials.password,
                otp_code,
            };
            crate::net::http::post_json(&self.url(VERIFY_OTP_PATH), &body, None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, otp_code);
            Err(ApiError::Unavailable)
        }
    }

    async fn refresh_access(&self, refresh_token: &str) -> Result<RefreshPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = crate::net::types::RefreshRequest { refresh: refresh_token };
            crate::net::http::post_json(&self.url(REFRESH_PATH), &body, None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(ApiError::Unavailable)
        }
    }
}
