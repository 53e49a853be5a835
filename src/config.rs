//! Configuration management for News Progress
//!
//! Handles environment variables and application settings.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Output format for the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "console" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Database URL
    pub database_url: String,

    /// Environment (development, production)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// CORS origins (empty means allow all)
    pub cors_origins: Vec<String>,

    /// Maximum pooled database connections
    pub max_connections: u32,

    /// Enable request logging
    pub enable_request_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: "sqlite:online_news.db".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            cors_origins: vec![],
            max_connections: 5,
            enable_request_logging: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("NEWS_PROGRESS_HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("NEWS_PROGRESS_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }

        // Database configuration
        if let Ok(database_url) = env::var("NEWS_PROGRESS_DATABASE_URL") {
            config.database_url = database_url;
        }

        if let Ok(max_connections) = env::var("NEWS_PROGRESS_MAX_CONNECTIONS") {
            config.max_connections = max_connections
                .parse()
                .map_err(|_| ConfigError::InvalidMaxConnections(max_connections))?;
        }

        // Environment
        if let Ok(environment) = env::var("NEWS_PROGRESS_ENVIRONMENT") {
            config.environment = environment;
        }

        // Logging
        if let Ok(log_level) = env::var("NEWS_PROGRESS_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Ok(log_format) = env::var("NEWS_PROGRESS_LOG_FORMAT") {
            config.log_format = log_format.parse()?;
        }

        // CORS origins
        if let Ok(cors_origins) = env::var("NEWS_PROGRESS_CORS_ORIGINS") {
            config.cors_origins = parse_origins(&cors_origins);
        }

        if let Ok(enable_logging) = env::var("NEWS_PROGRESS_ENABLE_REQUEST_LOGGING") {
            config.enable_request_logging = enable_logging
                .parse()
                .map_err(|_| ConfigError::InvalidBool(enable_logging))?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Configuration backed by a private in-memory database
    pub fn for_test() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            enable_request_logging: false,
            ..Self::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        if self.database_url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        if self.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                self.max_connections.to_string(),
            ));
        }

        Ok(())
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get server URL
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Log configuration (excluding sensitive data)
    pub fn log_config(&self) {
        info!("Configuration loaded:");
        info!("  Environment: {}", self.environment);
        info!("  Bind address: {}", self.bind_address());
        info!("  Database URL: {}", self.mask_database_url());
        info!("  Max connections: {}", self.max_connections);
        info!("  Log level: {} ({})", self.log_level, self.log_format);
        info!("  CORS origins: {:?}", self.cors_origins);
        info!("  Request logging: {}", self.enable_request_logging);

        if self.is_production() && self.cors_origins.is_empty() {
            warn!("CORS allows any origin in production");
        }
    }

    /// Mask database URL for logging
    pub fn mask_database_url(&self) -> String {
        if self.database_url.starts_with("sqlite:") {
            self.database_url.clone()
        } else if let Some((scheme, _)) = self.database_url.split_once("://") {
            format!("{scheme}://***")
        } else {
            "***".to_string()
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid max connections: {0}")]
    InvalidMaxConnections(String),

    #[error("Invalid boolean value: {0}")]
    InvalidBool(String),

    #[error("Invalid log format: {0} (expected compact or json)")]
    InvalidLogFormat(String),

    #[error("Empty database URL")]
    EmptyDatabaseUrl,
}
