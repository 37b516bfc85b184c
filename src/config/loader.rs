//! Configuration resolution from the process environment.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{
    AppConfig, GreetingConfig, ListenerConfig, DEFAULT_DB_PASSWORD, DEFAULT_HOST, DEFAULT_PORT,
};

/// Environment variable holding the greeting secret.
pub const DB_PASSWORD_ENV: &str = "DB_PASSWORD";

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "HOST";

/// Environment variable overriding the bind port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `HOST` was set but does not parse as an IP address.
    #[error("invalid HOST value {value:?}: expected an IP address")]
    InvalidHost { value: String },

    /// `PORT` was set but does not parse as a TCP port number.
    #[error("invalid PORT value {value:?}: expected a TCP port number")]
    InvalidPort { value: String },
}

impl AppConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// Called exactly once at startup. A variable that is unset or empty
    /// falls back to its default; a variable that is set but unparseable is
    /// an error, which callers treat as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve from an arbitrary variable lookup.
    ///
    /// Factored out of [`AppConfig::from_env`] so the resolution rules can
    /// be exercised without mutating the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Empty values count as unset. DB_PASSWORD keeps everything else
        // verbatim, whitespace and markup included.
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let db_password =
            lookup(DB_PASSWORD_ENV).unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string());

        let host = match lookup(HOST_ENV) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup(PORT_ENV) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            listener: ListenerConfig {
                bind_address: SocketAddr::new(host, port),
            },
            greeting: GreetingConfig { db_password },
        })
    }
}
