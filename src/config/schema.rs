//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! Values are resolved from the process environment exactly once at startup
//! (see `loader`); after that the structs are never mutated.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Fallback greeting value when `DB_PASSWORD` is absent or empty.
pub const DEFAULT_DB_PASSWORD: &str = "not-set";

/// Default bind host (all interfaces).
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Root configuration for the greeting server.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Greeting page configuration.
    pub greeting: GreetingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Address the TCP listener binds to.
    pub bind_address: SocketAddr,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

/// Greeting page configuration.
#[derive(Debug, Clone)]
pub struct GreetingConfig {
    /// Value rendered into the greeting page, taken from `DB_PASSWORD`.
    pub db_password: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            db_password: DEFAULT_DB_PASSWORD.to_string(),
        }
    }
}
