//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{Config, ServerConfig};
use crate::upstream::{AuthUpstream, UpstreamError};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Authentication service the auth routes are relayed to
    pub auth: AuthUpstream,
    /// Path prefix the dashboard uses for auth routes
    pub auth_prefix: String,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build state from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        let timeout = Duration::from_secs(config.server.request_timeout_secs);
        let auth = AuthUpstream::new(&config.auth, timeout)?;

        Ok(Self {
            server: Arc::new(config.server.clone()),
            auth,
            auth_prefix: normalize_prefix(&config.auth.path_prefix),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// `api/auth/` -> `/api/auth`
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/api/auth".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
