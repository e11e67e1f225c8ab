//! Auth Forwarding Route
//!
//! `ANY {prefix}/*path` relays the dashboard's authentication calls to the
//! external auth service so session cookies stay first-party.
//!
//! Method, path suffix, query, body and end-to-end headers go upstream
//! unchanged; status, headers (every `Set-Cookie` included) and body come
//! back unchanged.

use axum::{
    body::{Body, Bytes},
    extract::{OriginalUri, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::upstream::UpstreamError;

/// Headers that describe a single connection and must not be relayed
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

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Relay one request to the auth service
pub async fn forward(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let upstream_method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .map_err(|_| ApiError::Validation(format!("Unsupported method {}", method)))?;
    // Still percent-encoded, so `%2F` or `%3F` reach the service as sent.
    let path = uri
        .path()
        .strip_prefix(state.auth_prefix.as_str())
        .unwrap_or_default();
    let url = state.auth.url_for(path, uri.query());

    tracing::debug!(%method, path = %path, "Forwarding auth request");

    let mut request = state.auth.request(upstream_method, &url);
    for (name, value) in headers.iter() {
        if is_hop_by_hop(name.as_str()) || name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        request = request.header(name.as_str(), value.as_bytes());
    }
    if let Some(host) = headers.get(header::HOST) {
        request = request.header("x-forwarded-host", host.as_bytes());
    }

    let upstream = request
        .body(body)
        .send()
        .await
        .map_err(UpstreamError::classify)?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| ApiError::Internal(format!("Invalid upstream status: {}", e)))?;

    let mut response = Response::builder().status(status);
    for (name, value) in upstream.headers().iter() {
        if is_hop_by_hop(name.as_str()) || name.as_str().eq_ignore_ascii_case("content-length") {
            continue;
        }
        response = response.header(name.as_str(), value.as_bytes());
    }

    let bytes = upstream.bytes().await.map_err(UpstreamError::classify)?;

    if status.is_client_error() || status.is_server_error() {
        tracing::info!(%status, path = %path, "Auth service rejected request");
    }

    response
        .body(Body::from(bytes))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_by_hop_detection() {
        assert!(is_hop_by_hop("Connection"));
        assert!(is_hop_by_hop("transfer-encoding"));
        assert!(!is_hop_by_hop("set-cookie"));
        assert!(!is_hop_by_hop("content-type"));
    }
}
