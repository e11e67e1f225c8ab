//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides; command
//! line flags are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled dashboard bundle (`index.html` + wasm)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Upper bound for forwarded request bodies
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Extra origins allowed to call the auth relay with credentials,
    /// e.g. a `trunk serve` dev server
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./synk-ui/dist")
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Authentication upstream configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the authentication service's auth routes
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Path under which the dashboard reaches the auth routes
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
}

fn default_upstream_url() -> String {
    "http://localhost:3001/api/auth".to_string()
}

fn default_path_prefix() -> String {
    "/api/auth".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            path_prefix: default_path_prefix(),
        }
    }
}

impl AuthConfig {
    /// Upstream URL without a trailing slash
    pub fn upstream_base(&self) -> &str {
        self.upstream_url.trim_end_matches('/')
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from default locations, falling back to defaults plus environment
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("synk").join("config.toml")),
            Some(PathBuf::from("/etc/synk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// Load the first existing file in `paths`. A file that exists but does
    /// not parse is an error rather than a silent fall back to defaults.
    pub fn load_first<F>(paths: &[PathBuf], lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                tracing::info!("Loading config from {:?}", path);
                Self::load(path)?
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Config::default()
            }
        };
        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Apply `SYNK_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SYNK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SYNK_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SYNK_PORT".to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(dir) = lookup("SYNK_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("SYNK_AUTH_URL") {
            self.auth.upstream_url = url;
        }
        if let Some(origins) = lookup("SYNK_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(level) = lookup("SYNK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SYNK_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# synk Configuration
#
# Environment variables override these settings:
# - SYNK_HOST
# - SYNK_PORT
# - SYNK_STATIC_DIR
# - SYNK_AUTH_URL
# - SYNK_CORS_ORIGINS (comma separated)
# - SYNK_LOG_LEVEL
# - SYNK_LOG_FORMAT

[server]
# Address to bind
host = "0.0.0.0"
port = 3000

# Compiled dashboard bundle (trunk build output)
static_dir = "./synk-ui/dist"

# Timeout for forwarded authentication requests (seconds)
request_timeout_secs = 30

# Largest request body forwarded to the auth service (bytes)
max_body_bytes = 1048576

# Other origins allowed to call the auth relay with cookies
cors_origins = []

[auth]
# Authentication service auth routes
upstream_url = "http://localhost:3001/api/auth"

# Path the dashboard uses to reach them
path_prefix = "/api/auth"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.path_prefix, "/api/auth");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.upstream_url, "http://localhost:3001/api/auth");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::parse("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SYNK_PORT", "9000"),
            ("SYNK_AUTH_URL", "https://auth.example.com/api/auth/"),
            ("SYNK_LOG_FORMAT", "json"),
            ("SYNK_CORS_ORIGINS", "http://localhost:8080, ,http://127.0.0.1:8080"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.upstream_base(), "https://auth.example.com/api/auth");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.server.cors_origins,
            vec!["http://localhost:8080", "http://127.0.0.1:8080"]
        );
    }

    #[test]
    fn test_bad_port_override_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(|k| (k == "SYNK_PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();

        let err = Config::load_first(&[dir.path().join("missing.toml"), path.clone()], |_| None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: p, .. } if p == path));
    }

    #[test]
    fn test_first_existing_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "[server]\nport = 4000\n").unwrap();
        std::fs::write(&second, "[server]\nport = 5000\n").unwrap();

        let config = Config::load_first(&[dir.path().join("missing.toml"), first, second], |_| None).unwrap();
        assert_eq!(config.server.port, 4000);

        let config = Config::load_first(&[dir.path().join("missing.toml")], |_| None).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
