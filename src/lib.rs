//! # synk
//!
//! Host process for the synk.ai dashboard. The dashboard itself is the
//! Leptos application in `synk-ui/`; this crate serves its compiled bundle
//! and relays the dashboard's authentication calls to the external auth
//! service so that session cookies stay first-party.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`server`]: Axum router, auth forwarding and health probes
//! - [`upstream`]: HTTP client for the authentication service
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use synk::{config::Config, server::{serve, AppState}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let state = AppState::from_config(&config)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod server;
pub mod upstream;

pub use config::{
    generate_default_config, AuthConfig, Config, ConfigError, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use server::{build_router, serve, ApiError, ApiResult, AppState};
pub use upstream::{AuthUpstream, UpstreamError};
