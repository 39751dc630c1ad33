//! The session store: single source of truth for "is there a valid session,
//! and what does it claim".
//!
//! ARCHITECTURE
//! ============
//! Login writes the token pair and decoded claims to storage; every later
//! question (route guard, API calls, menus) is answered from storage alone.
//! The authentication check is purely local and never refreshes. Refresh is
//! explicit and all-or-nothing: any failure tears the whole session down.
//!
//! CONCURRENCY
//! ===========
//! Concurrent `refresh()` calls are not coordinated; a later write simply
//! replaces an earlier one. Callers serialize refreshes themselves.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use super::claims::{Claims, DecodeError, decode_claims, now_epoch_secs};
use super::error::SessionError;
use super::storage::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, TokenStorage, USER_KEY};
use super::transport::AuthTransport;
use crate::net::types::{Credentials, LoginPayload};

/// Session state over a storage area and an authentication transport.
///
/// Cheap to clone; clones share the same storage and transport.
pub struct SessionStore<S, T> {
    storage: Arc<S>,
    transport: Arc<T>,
}

impl<S, T> Clone for SessionStore<S, T> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage), transport: Arc::clone(&self.transport) }
    }
}

impl<S: TokenStorage, T: AuthTransport> SessionStore<S, T> {
    pub fn new(storage: S, transport: T) -> Self {
        Self { storage: Arc::new(storage), transport: Arc::new(transport) }
    }

    /// Storage backing this session.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Transport used for login and refresh.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in with username and password.
    ///
    /// When the response carries an access token the session is written to
    /// storage. A response without one (second factor pending) is returned
    /// as-is and storage is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] with the server's status and body when
    /// the request fails, or a decode/storage error when the returned token
    /// cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginPayload, SessionError> {
        let credentials = Credentials::new(username, password);
        let payload = self.transport.obtain_tokens(&credentials).await?;
        self.establish(&payload)?;
        Ok(payload)
    }

    /// Second step of a two-factor login.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub async fn verify_otp(
        &self,
        username: &str,
        password: &str,
        otp_code: &str,
    ) -> Result<LoginPayload, SessionError> {
        let credentials = Credentials::new(username, password);
        let payload = self.transport.verify_otp(&credentials, otp_code).await?;
        self.establish(&payload)?;
        Ok(payload)
    }

    fn establish(&self, payload: &LoginPayload) -> Result<(), SessionError> {
        let Some(access) = payload.access.as_deref() else {
            return Ok(());
        };
        let mut claims = decode_claims(access)?;
        if let Some(user) = &payload.user {
            claims = claims.merged_with(user)?;
        }
        let user_json = serde_json::to_string(&claims).map_err(|e| DecodeError::Json(e.to_string()))?;

        self.storage.set_item(ACCESS_TOKEN_KEY, access)?;
        // A stale refresh token would belong to whoever signed in before.
        match payload.refresh.as_deref() {
            Some(refresh) => self.storage.set_item(REFRESH_TOKEN_KEY, refresh)?,
            None => self.storage.remove_item(REFRESH_TOKEN_KEY),
        }
        self.storage.set_item(USER_KEY, &user_json)?;
        log::info!("session established for {}", claims.username);
        Ok(())
    }

    /// Remove every session key. Never touches the network.
    pub fn logout(&self) {
        for key in SESSION_KEYS {
            self.storage.remove_item(key);
        }
        log::info!("session cleared");
    }

    /// Whether a live access token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_epoch_secs())
    }

    /// [`SessionStore::is_authenticated`] against an explicit clock.
    ///
    /// Absent or undecodable tokens count as unauthenticated.
    pub fn is_authenticated_at(&self, now_secs: i64) -> bool {
        let Some(token) = self.storage.get_item(ACCESS_TOKEN_KEY) else {
            return false;
        };
        decode_claims(&token).is_ok_and(|claims| claims.is_live_at(now_secs))
    }

    /// The stored user claims. Expiry is not re-checked.
    pub fn current_user(&self) -> Option<Claims> {
        let raw = self.storage.get_item(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get_item(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get_item(REFRESH_TOKEN_KEY)
    }

    /// Obtain a new access token with the stored refresh token.
    ///
    /// Only the access token is overwritten on success. Any failure logs the
    /// session out before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingRefreshToken`] without a network call
    /// when no refresh token is stored, otherwise the API or storage failure.
    pub async fn refresh(&self) -> Result<String, SessionError> {
        let result = self.try_refresh().await;
        if let Err(e) = &result {
            log::warn!("token refresh failed, clearing session: {e}");
            self.logout();
        }
        result
    }

    async fn try_refresh(&self) -> Result<String, SessionError> {
        let refresh = self.refresh_token().ok_or(SessionError::MissingRefreshToken)?;
        let payload = self.transport.refresh_access(&refresh).await?;
        self.storage.set_item(ACCESS_TOKEN_KEY, &payload.access)?;
        Ok(payload.access)
    }
}
