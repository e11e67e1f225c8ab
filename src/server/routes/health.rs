//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (auth service reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::state::AppState;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" or "unreachable"
    pub auth: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 when the authentication service answers its probe.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.auth.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(upstream = %state.auth.base_url(), "Auth service not ready: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let auth_ok = state.auth.health_check().await.is_ok();

    Json(HealthResponse {
        status: if auth_ok { "healthy" } else { "degraded" }.to_string(),
        auth: if auth_ok { "ok" } else { "unreachable" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
