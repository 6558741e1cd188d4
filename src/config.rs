use anyhow::{Context, Result};
use std::env;

/// Service configuration, read once from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "3000")
                .parse()
                .context("PORT must be a valid port number")?,
            db_host: var("DB_HOST", "localhost"),
            db_port: var("DB_PORT", "5432")
                .parse()
                .context("DB_PORT must be a valid port number")?,
            db_name: var("DB_NAME", "postgres"),
            db_user: var("DB_USER", "postgres"),
            db_password: var("DB_PASSWORD", ""),
            db_max_connections: var("DB_MAX_CONNECTIONS", "10")
                .parse()
                .context("DB_MAX_CONNECTIONS must be a positive number")?,
            db_acquire_timeout_secs: var("DB_ACQUIRE_TIMEOUT_SECS", "5")
                .parse()
                .context("DB_ACQUIRE_TIMEOUT_SECS must be a number of seconds")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
