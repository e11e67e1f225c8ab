//! synk Host
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings are read from `--config`, or the first of
//! `~/.config/synk/config.toml`, `/etc/synk/config.toml`, `./config.toml`,
//! then overridden by `SYNK_*` environment variables and finally by flags.
//! `RUST_LOG` takes precedence over the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use synk::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use synk::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "synk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Host for the synk.ai dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard and relay authentication traffic
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding the compiled dashboard
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Authentication service auth routes, e.g. http://localhost:3001/api/auth
        #[arg(long)]
        auth_url: Option<String>,
    },

    /// Print a default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Commands::Serve {
            config,
            host,
            port,
            static_dir,
            auth_url,
        } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => Config::load_default().context("loading default config")?,
            };

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }
            if let Some(url) = auth_url {
                config.auth.upstream_url = url;
            }

            init_tracing(&config.logging);

            tracing::info!("Starting synk host v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Dashboard bundle: {:?}", config.server.static_dir);
            tracing::info!("Auth service: {}", config.auth.upstream_base());

            if !config.server.static_dir.join("index.html").exists() {
                tracing::warn!(
                    "No index.html in {:?}; build synk-ui with `trunk build` first",
                    config.server.static_dir
                );
            }

            let state = AppState::from_config(&config).context("creating auth client")?;

            match state.auth.health_check().await {
                Ok(()) => tracing::info!("Auth service reachable"),
                Err(e) => tracing::warn!("Auth service not reachable yet: {}", e),
            }

            serve(state).await?;

            tracing::info!("synk host stopped");
            Ok(())
        }
    }
}

/// Initialize tracing from the logging section
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("synk={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
