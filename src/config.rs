//! Configuration Module
//!
//! Loads server and database settings from environment variables.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Errors raised while reading configuration values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// Address the HTTP server binds to
    pub host: Ipv4Addr,
    /// HTTP server port
    pub port: u16,
    /// Upper bound on pooled storage sessions
    pub max_connections: u32,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - full connection URL; when unset it is built from `DB_NAME`
    /// - `DB_NAME` - database file stem (default: players)
    /// - `HOST` - bind address (default: 0.0.0.0)
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `DB_MAX_CONNECTIONS` - pool size (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                let name = lookup("DB_NAME").unwrap_or_else(|| "players".to_string());
                format!("sqlite://{name}.db")
            }
        };

        Ok(Self {
            database_url,
            host: parse_var(&lookup, "HOST", defaults.host)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://players.db".to_string(),
            host: Ipv4Addr::UNSPECIFIED,
            port: 8000,
            max_connections: 5,
        }
    }
}
