//! Same-origin reverse proxy for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls `/api/...` on the host that served it. This
//! handler forwards method, query, headers (including `Authorization`), and
//! body to `API_UPSTREAM_URL` and relays the upstream response unchanged
//! apart from hop-by-hop headers. Upstream statuses, 401 included, pass
//! through untouched so the client's refresh logic sees them.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers that describe one connection and must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": "API upstream unavailable." }))).into_response()
    }
}

#[must_use]
pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Whether a header is copied across the proxy in either direction.
///
/// `host` and `content-length` are recomputed for each leg.
#[must_use]
pub fn is_forwarded(name: &str) -> bool {
    !is_hop_by_hop(name) && !name.eq_ignore_ascii_case("host") && !name.eq_ignore_ascii_case("content-length")
}

/// Upstream URL for the path captured after `/api/`, keeping any query.
#[must_use]
pub fn upstream_url(base: &str, rest: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), rest.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_forwarded(name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*rest}`.
///
/// # Errors
///
/// Returns [`ProxyError`] (rendered as 502) when the upstream cannot be
/// reached or its body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    Path(rest): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_upstream_url, &rest, uri.query());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forwarded_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), "api proxied");

    let mut response = (status, bytes).into_response();
    response.headers_mut().extend(response_headers);
    Ok(response)
}
