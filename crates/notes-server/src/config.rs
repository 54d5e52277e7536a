//! Server configuration from environment variables.

use std::env;

use notes_core::DEFAULT_TAKE_N;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database connection URL. `None` runs the server on the in-memory store.
    pub database_url: Option<String>,
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Number of content characters used as the title of untitled notes.
    pub take_default_n: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            take_default_n: DEFAULT_TAKE_N,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DATABASE_URL`: Database connection string (in-memory store when unset)
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `TAKE_DEFAULT_N` or `TakeDefaultN`: fallback title length (default: 20)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        let take_default_n = match lookup("TAKE_DEFAULT_N").or_else(|| lookup("TakeDefaultN")) {
            Some(raw) => parse_take_default_n(&raw)?,
            None => defaults.take_default_n,
        };

        Ok(Self {
            database_url,
            port,
            log_level,
            cors_allowed_origins,
            take_default_n,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_take_default_n(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            name: "TAKE_DEFAULT_N".to_string(),
            reason: "must be a positive integer".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::InvalidValue {
            name: "TAKE_DEFAULT_N".to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
