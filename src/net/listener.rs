//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Announce the listening socket once the bind succeeds
//! - Surface bind failures as typed errors; callers treat them as fatal

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to the configured address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the configured address and announce the listening socket.
///
/// Binding is attempted exactly once; an address already in use surfaces
/// as [`ListenerError::Bind`] rather than a retry.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let listener = TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| ListenerError::Bind {
            address: config.bind_address,
            source,
        })?;

    let local_addr = listener.local_addr().map_err(|source| ListenerError::Bind {
        address: config.bind_address,
        source,
    })?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    Ok(listener)
}
