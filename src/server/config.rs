//! Environment configuration of the server.

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server settings read from the environment at startup.
pub struct Config {
    /// Connection string of the company and geo catalog database (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey/Redis URL of the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Address the HTTP listener binds to (`LISTEN_ADDR`, default `0.0.0.0:8080`)
    pub listen_addr: String,
    /// Maximum log level (`LOG_LEVEL`, default `info`)
    pub log_level: Level,
}

impl Config {
    /// Reads the configuration, loading `.env` first is left to the caller.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable was present and parsed
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `LOG_LEVEL` isn't a known level
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            log_level: parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref())?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses `LOG_LEVEL`, defaulting to `info` when unset.
fn parse_log_level(raw: Option<&str>) -> Result<Level, ConfigError> {
    match raw {
        None => Ok(Level::INFO),
        Some(value) => value
            .parse::<Level>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            }),
    }
}
