//! Authenticated REST helpers for the case-management API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored access token as a bearer credential.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 triggers exactly one `refresh()` followed by one replay. If the
//! refresh fails the session has already been torn down and callers receive
//! [`ApiError::SessionExpired`], which views answer by sending the user back
//! to `/login`. Refresh is never attempted on token expiry alone. Every
//! authenticated verb goes through [`with_refresh`] so the rule lives in one
//! place.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Listing, Notification};
use crate::session::{AuthTransport, SessionStore, TokenStorage};

/// What to do after an authenticated request failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Hand the error to the caller.
    Fail,
    /// Refresh the access token, then send the request once more.
    RefreshAndReplay,
}

/// Only a first 401 earns a refresh; everything else, including a 401 after
/// the refresh, is final.
#[must_use]
pub fn retry_decision(error: &ApiError, already_refreshed: bool) -> RetryDecision {
    if error.is_unauthorized() && !already_refreshed {
        RetryDecision::RefreshAndReplay
    } else {
        RetryDecision::Fail
    }
}

/// Registries browsable from the navigation drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Registry {
    Clients,
    Cases,
    Documents,
    Deadlines,
    Tasks,
    Decisions,
    Tags,
    Users,
    Audit,
}

impl Registry {
    pub const ALL: [Self; 9] = [
        Self::Clients,
        Self::Cases,
        Self::Documents,
        Self::Deadlines,
        Self::Tasks,
        Self::Decisions,
        Self::Tags,
        Self::Users,
        Self::Audit,
    ];

    /// API collection path, relative to the API base.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Clients => "/documents/clients/",
            Self::Cases => "/documents/cases/",
            Self::Documents => "/documents/documents/",
            Self::Deadlines => "/documents/deadlines/",
            Self::Tasks => "/documents/tasks/",
            Self::Decisions => "/documents/decisions/",
            Self::Tags => "/documents/tags/",
            Self::Users => "/users/",
            Self::Audit => "/documents/audit/",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Clients => "Clients",
            Self::Cases => "Cases",
            Self::Documents => "Documents",
            Self::Deadlines => "Agenda",
            Self::Tasks => "Tasks",
            Self::Decisions => "Decisions",
            Self::Tags => "Tags",
            Self::Users => "Users",
            Self::Audit => "Audit log",
        }
    }
}

pub const SEARCH_PATH: &str = "/documents/documents/search/";
pub const NOTIFICATIONS_PATH: &str = "/documents/notifications/";
pub const MARK_ALL_READ_PATH: &str = "/documents/notifications/mark_all_as_read/";

/// Path that marks one notification as read.
#[must_use]
pub fn mark_read_path(id: u64) -> String {
    format!("{NOTIFICATIONS_PATH}{id}/mark_as_read/")
}

/// Run `send` with the current access token, refreshing once on 401 and
/// replaying with the new token.
///
/// # Errors
///
/// Returns the final [`ApiError`], or [`ApiError::SessionExpired`] when the
/// refresh after a 401 failed. The session is already cleared in that case.
pub async fn with_refresh<R, S, T, F, Fut>(session: &SessionStore<S, T>, path: &str, send: F) -> Result<R, ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
    F: Fn(Option<String>) -> Fut,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let mut refreshed = false;
    loop {
        match send(session.access_token()).await {
            Err(err) if retry_decision(&err, refreshed) == RetryDecision::RefreshAndReplay => {
                refreshed = true;
                if let Err(e) = session.refresh().await {
                    log::warn!("refresh after 401 on {path} failed: {e}");
                    return Err(ApiError::SessionExpired);
                }
            }
            other => return other,
        }
    }
}

/// `GET path` with the stored bearer token, refreshing once on 401.
///
/// # Errors
///
/// See [`with_refresh`]. Off-browser always [`ApiError::Unavailable`].
pub async fn get_authorized<R, S, T>(session: &SessionStore<S, T>, path: &str) -> Result<R, ApiError>
where
    R: DeserializeOwned,
    S: TokenStorage,
    T: AuthTransport,
{
    get_authorized_with_query(session, path, &[]).await
}

/// Like [`get_authorized`], with query parameters appended to the URL.
///
/// # Errors
///
/// See [`with_refresh`].
pub async fn get_authorized_with_query<R, S, T>(
    session: &SessionStore<S, T>,
    path: &str,
    query: &[(&str, &str)],
) -> Result<R, ApiError>
where
    R: DeserializeOwned,
    S: TokenStorage,
    T: AuthTransport,
{
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(path);
        let url = url.as_str();
        with_refresh(session, path, move |token| async move {
            super::http::get_json::<R>(url, query, token.as_deref()).await
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, query);
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with an empty JSON object, refreshing once on 401.
///
/// # Errors
///
/// See [`with_refresh`].
pub async fn post_authorized<R, S, T>(session: &SessionStore<S, T>, path: &str) -> Result<R, ApiError>
where
    R: DeserializeOwned,
    S: TokenStorage,
    T: AuthTransport,
{
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(path);
        let url = url.as_str();
        let body = serde_json::json!({});
        let body = &body;
        with_refresh(session, path, move |token| async move {
            super::http::post_json::<_, R>(url, body, token.as_deref()).await
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the listing of one registry.
///
/// # Errors
///
/// See [`get_authorized`].
pub async fn fetch_listing<S, T>(session: &SessionStore<S, T>, registry: Registry) -> Result<Listing, ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
{
    get_authorized(session, registry.endpoint()).await
}

/// Fetch the server-side profile of the signed-in user from `/users/me/`.
///
/// # Errors
///
/// See [`get_authorized`].
pub async fn fetch_me<S, T>(session: &SessionStore<S, T>) -> Result<serde_json::Value, ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
{
    get_authorized(session, "/users/me/").await
}

/// Full-text document search. A blank query is answered locally with an
/// empty listing.
///
/// # Errors
///
/// See [`get_authorized`].
pub async fn search_documents<S, T>(session: &SessionStore<S, T>, query: &str) -> Result<Listing, ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
{
    let query = query.trim();
    if query.is_empty() {
        return Ok(Listing::default());
    }
    get_authorized_with_query(session, SEARCH_PATH, &[("q", query)]).await
}

/// Notifications addressed to the signed-in user, newest first as the server
/// orders them. Rows that do not decode are skipped.
///
/// # Errors
///
/// See [`get_authorized`].
pub async fn fetch_notifications<S, T>(session: &SessionStore<S, T>) -> Result<Vec<Notification>, ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
{
    let listing: Listing = get_authorized(session, NOTIFICATIONS_PATH).await?;
    Ok(listing.decode_rows())
}

/// # Errors
///
/// See [`post_authorized`].
pub async fn mark_notification_read<S, T>(session: &SessionStore<S, T>, id: u64) -> Result<(), ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
{
    post_authorized::<serde_json::Value, _, _>(session, &mark_read_path(id)).await.map(drop)
}

/// # Errors
///
/// See [`post_authorized`].
pub async fn mark_all_notifications_read<S, T>(session: &SessionStore<S, T>) -> Result<(), ApiError>
where
    S: TokenStorage,
    T: AuthTransport,
{
    post_authorized::<serde_json::Value, _, _>(session, MARK_ALL_READ_PATH).await.map(drop)
}
