//! Server configuration for the Advisor REST API.
//!
//! Supports both programmatic configuration and environment variable
//! overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ADVISOR_SERVER_PORT` | 8080 | Server port |
//! | `ADVISOR_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ADVISOR_LOG_LEVEL` | info | Log level |
//! | `ADVISOR_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `ADVISOR_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ADVISOR_ENABLE_CORS` | true | Enable CORS |
//! | `ADVISOR_CORS_ORIGINS` | * | Allowed origins |
//! | `ADVISOR_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `ADVISOR_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `ADVISOR_BASE_URL` | http://localhost:8080 | Base URL for Location headers |
//! | `ADVISOR_STORAGE_BACKEND` | memory | `memory` or `sqlite` |
//! | `ADVISOR_DATABASE_URL` | (none) | SQLite database path |
//! | `ADVISOR_ENABLE_REQUEST_ID` | true | Set and propagate `x-request-id` |
//!
//! # Example
//!
//! ```rust
//! use advisor_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;

/// Which repository backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// Process-local map, lost on restart.
    Memory,
    /// SQLite database file.
    Sqlite,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Memory => write!(f, "memory"),
            StorageBackendMode::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackendMode::Memory),
            "sqlite" => Ok(StorageBackendMode::Sqlite),
            other => Err(format!(
                "unknown storage backend '{}' (expected 'memory' or 'sqlite')",
                other
            )),
        }
    }
}

/// Server configuration for the Advisor REST API.
///
/// Construct it from the command line and environment with
/// [`ServerConfig::parse`], from the environment alone with
/// [`ServerConfig::from_env`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "advisor-server")]
#[command(about = "Advisor Registration API Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ADVISOR_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ADVISOR_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ADVISOR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "ADVISOR_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "ADVISOR_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ADVISOR_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ADVISOR_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "ADVISOR_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "ADVISOR_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "ADVISOR_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Storage backend: memory or sqlite.
    #[arg(long, env = "ADVISOR_STORAGE_BACKEND", default_value = "memory")]
    pub storage_backend: String,

    /// SQLite database path (`:memory:` for a transient database).
    #[arg(long, env = "ADVISOR_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable request ID tracking.
    #[arg(long, env = "ADVISOR_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            storage_backend: "memory".to_string(),
            database_url: None,
            enable_request_id: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// Parses environment variables without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["advisor-server"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage_backend.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.base_url.ends_with('/') {
            errors.push("Base URL must not end with '/'".to_string());
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            base_url: "http://localhost:0".to_string(),
            enable_request_id: false,
            ..Default::default()
        }
    }
}
