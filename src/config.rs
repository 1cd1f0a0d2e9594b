//! Environment configuration.
//!
//! Two knobs, both read from the environment at startup:
//!
//! - `SLACK_URL` (required) — the chat endpoint's incoming-webhook URL.
//! - `BIND_ADDR` (optional) — the address the HTTP server listens on,
//!   defaulting to `0.0.0.0:3000`.

use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the chat endpoint URL.
const ENV_SLACK_URL: &str = "SLACK_URL";

/// Environment variable naming the listen address.
const ENV_BIND_ADDR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);

/// Errors that can occur while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is set but unusable.
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration for the relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat endpoint the notifier POSTs to.
    pub slack_url: String,

    /// Address the HTTP server binds.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let slack_url = std::env::var(ENV_SLACK_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_SLACK_URL))?;

        let bind_addr = match std::env::var(ENV_BIND_ADDR) {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: ENV_BIND_ADDR,
                value,
            })?,
            Err(_) => SocketAddr::from(DEFAULT_BIND_ADDR),
        };

        Ok(Config {
            slack_url,
            bind_addr,
        })
    }
}
