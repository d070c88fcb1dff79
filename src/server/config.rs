//! Environment configuration.

use crate::server::error::config::ConfigError;

/// Storage used when `DATABASE_URL` is not set: a local SQLite file, created on first start
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
/// Port used when `PORT` is not set
pub static DEFAULT_PORT: u16 = 3000;

/// Runtime settings read from the environment at startup.
#[derive(Debug)]
pub struct Config {
    /// SeaORM connection URL, SQLite or Postgres
    pub database_url: String,
    /// TCP port the HTTP server binds on all interfaces
    pub port: u16,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                tracing::info!("DATABASE_URL not set, using default: {}", DEFAULT_DATABASE_URL);
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
