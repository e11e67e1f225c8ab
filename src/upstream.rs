//! Authentication Upstream Client
//!
//! HTTP client for the external authentication service. The host never
//! interprets auth payloads; it only relays requests and checks liveness.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::AuthConfig;

/// Handle to the authentication service's auth routes
#[derive(Clone)]
pub struct AuthUpstream {
    client: Client,
    base_url: String,
}

impl AuthUpstream {
    /// Create a new upstream client with the given request timeout
    pub fn new(config: &AuthConfig, timeout: Duration) -> Result<Self, UpstreamError> {
        // Provider sign-in answers with redirects meant for the browser.
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(UpstreamError::Request)?;

        Ok(Self {
            client,
            base_url: config.upstream_base().to_string(),
        })
    }

    /// Base URL requests are relayed to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the upstream URL for a relayed path and optional raw query
    pub fn url_for(&self, path: &str, query: Option<&str>) -> String {
        let path = path.trim_start_matches('/');
        match query {
            Some(q) if !q.is_empty() => format!("{}/{}?{}", self.base_url, path, q),
            _ => format!("{}/{}", self.base_url, path),
        }
    }

    /// Start a request against the upstream
    pub fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client.request(method, url)
    }

    /// Check that the auth service answers its `ok` probe
    pub async fn health_check(&self) -> Result<(), UpstreamError> {
        let url = self.url_for("ok", None);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::classify)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(UpstreamError::Status(response.status().as_u16()))
        }
    }
}

/// Upstream failures
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Authentication service timed out")]
    Timeout,

    #[error("Authentication service unavailable")]
    Unavailable,

    #[error("Authentication service answered {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Map a transport error onto timeout / unavailable / other
    pub fn classify(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_connect() {
            UpstreamError::Unavailable
        } else {
            UpstreamError::Request(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(url: &str) -> AuthUpstream {
        let config = AuthConfig {
            upstream_url: url.to_string(),
            ..Default::default()
        };
        AuthUpstream::new(&config, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_url_for_joins_path_and_query() {
        let up = upstream("http://auth.local/api/auth/");
        assert_eq!(up.base_url(), "http://auth.local/api/auth");
        assert_eq!(up.url_for("sign-in/email", None), "http://auth.local/api/auth/sign-in/email");
        assert_eq!(
            up.url_for("/callback/github", Some("code=abc&state=xyz")),
            "http://auth.local/api/auth/callback/github?code=abc&state=xyz"
        );
        assert_eq!(up.url_for("get-session", Some("")), "http://auth.local/api/auth/get-session");
    }

    #[tokio::test]
    async fn test_health_check_unreachable() {
        let up = upstream("http://127.0.0.1:1/api/auth");
        let err = up.health_check().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unavailable | UpstreamError::Request(_)));
    }
}
