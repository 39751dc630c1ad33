//! Thin JSON-over-HTTP helpers on top of `gloo-net`.
//!
//! Client-side (hydrate) only; the header helpers are shared with tests.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use super::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// `GET url?query`, decoding a JSON body.
#[cfg(feature = "hydrate")]
pub(crate) async fn get_json<R: DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    bearer: Option<&str>,
) -> Result<R, ApiError> {
    let mut builder = gloo_net::http::Request::get(url);
    if !query.is_empty() {
        builder = builder.query(query.iter().copied());
    }
    if let Some(token) = bearer {
        builder = builder.header(AUTHORIZATION, &bearer_header(token));
    }
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

/// `POST url` with a JSON body, decoding a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<B, R>(url: &str, body: &B, bearer: Option<&str>) -> Result<R, ApiError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = bearer {
        builder = builder.header(AUTHORIZATION, &bearer_header(token));
    }
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_json<R: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<R, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::debug!("api request to {} failed with {status}", resp.url());
        return Err(ApiError::Status { status, body });
    }
    resp.json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
