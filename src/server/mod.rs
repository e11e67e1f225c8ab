//! synk Host Server
//!
//! Serves the compiled dashboard and relays authentication traffic, built
//! with Axum.
//!
//! # Endpoints
//!
//! ## Authentication
//! - `ANY /api/auth/*path` - Relayed to the authentication service
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (auth service reachable)
//! - `GET /health` - Full health status
//!
//! ## Dashboard
//! - anything else - File from the static bundle, `index.html` otherwise

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Credentialed CORS for the configured origins; `None` when there are none
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Client-side routes (/agents, /auth/sign-in, ...) all resolve to the bundle's index.
    let static_dir = &state.server.static_dir;
    let dashboard = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let auth_route = format!("{}/*path", state.auth_prefix);
    let body_limit = state.server.max_body_bytes;
    let cors = cors_layer(&state.server.cors_origins);

    let shared_state = Arc::new(state);

    let router = Router::new()
        .route(&auth_route, any(routes::auth::forward))
        .nest("/health", health_routes)
        .fallback_service(dashboard)
        .layer(DefaultBodyLimit::max(body_limit));

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the host server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("synk listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("synk shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        extract::{OriginalUri, RawQuery},
        http::{header, Request, StatusCode},
        response::{AppendHeaders, IntoResponse},
        routing::post,
        Json,
    };
    use std::net::SocketAddr;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>synk.ai</body></html>";

    /// Stand-in for the authentication service
    async fn spawn_auth_service() -> SocketAddr {
        let app = Router::new()
            .route(
                "/api/auth/sign-in/email",
                post(|| async {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(serde_json::json!({
                            "code": "INVALID_EMAIL_OR_PASSWORD",
                            "message": "Invalid credentials"
                        })),
                    )
                }),
            )
            .route(
                "/api/auth/sign-up/email",
                post(|body: String| async move {
                    let sent: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
                    (
                        AppendHeaders([
                            (header::SET_COOKIE, "session_token=abc; Path=/; HttpOnly"),
                            (header::SET_COOKIE, "session_data=xyz; Path=/"),
                        ]),
                        Json(serde_json::json!({
                            "token": "abc",
                            "user": { "id": "u1", "email": sent["email"], "name": sent["name"] }
                        })),
                    )
                        .into_response()
                }),
            )
            .route(
                "/api/auth/echo",
                get(|RawQuery(q): RawQuery| async move { q.unwrap_or_default() }),
            )
            .route(
                "/api/auth/callback/*rest",
                get(|OriginalUri(uri): OriginalUri| async move { uri.path().to_string() }),
            )
            .route("/api/auth/ok", get(|| async { Json(serde_json::json!({ "ok": true })) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn create_test_app(auth_url: &str) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.path().join("synk-ui.js"), "console.log('synk')").unwrap();

        let mut config = Config::default();
        config.server.static_dir = dir.path().to_path_buf();
        config.auth.upstream_url = auth_url.to_string();

        let state = AppState::from_config(&config).unwrap();
        (build_router(state), dir)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app("http://127.0.0.1:1/api/auth");

        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_with_auth_service() {
        let addr = spawn_auth_service().await;
        let (app, _dir) = create_test_app(&format!("http://{}/api/auth", addr));

        let response = app
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_auth_service_down() {
        let (app, _dir) = create_test_app("http://127.0.0.1:1/api/auth");

        let response = app
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full_reports_degraded() {
        let (app, _dir) = create_test_app("http://127.0.0.1:1/api/auth");

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["auth"], "unreachable");
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (app, _dir) = create_test_app("http://127.0.0.1:1/api/auth");

        let response = app
            .oneshot(Request::builder().uri("/synk-ui.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "console.log('synk')");
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let (app, _dir) = create_test_app("http://127.0.0.1:1/api/auth");

        let response = app
            .oneshot(Request::builder().uri("/agents").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_forward_passes_rejection_through() {
        let addr = spawn_auth_service().await;
        let (app, _dir) = create_test_app(&format!("http://{}/api/auth", addr));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/sign-in/email")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"email":"a@b.co","password":"nope"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_forward_keeps_every_set_cookie() {
        let addr = spawn_auth_service().await;
        let (app, _dir) = create_test_app(&format!("http://{}/api/auth", addr));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/sign-up/email")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"email":"ada@example.com","name":"Ada","password":"secret"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookies: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with("session_token=abc"));

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["user"]["name"], "Ada");
    }

    #[tokio::test]
    async fn test_forward_preserves_query() {
        let addr = spawn_auth_service().await;
        let (app, _dir) = create_test_app(&format!("http://{}/api/auth", addr));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/echo?code=abc&state=xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "code=abc&state=xyz");
    }

    #[tokio::test]
    async fn test_forward_keeps_encoded_path() {
        let addr = spawn_auth_service().await;
        let (app, _dir) = create_test_app(&format!("http://{}/api/auth", addr));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/callback/a%3Fx%3D1%26y")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "/api/auth/callback/a%3Fx%3D1%26y");
    }

    #[tokio::test]
    async fn test_forward_unreachable_is_bad_gateway() {
        let (app, _dir) = create_test_app("http://127.0.0.1:1/api/auth");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/sign-out")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_UNAVAILABLE");
    }

    #[test]
    fn test_cors_layer_needs_a_valid_origin() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_none());
        assert!(cors_layer(&["http://localhost:8080".to_string()]).is_some());
    }

    #[tokio::test]
    async fn test_cors_preflight_for_configured_origin() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.server.static_dir = dir.path().to_path_buf();
        config.server.cors_origins = vec!["http://localhost:8080".to_string()];
        let app = build_router(AppState::from_config(&config).unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/auth/sign-in/email")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
    }
}
