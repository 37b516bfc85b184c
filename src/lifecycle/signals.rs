//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Translate signals into completion of a shutdown future
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - No drain phases or deadlines: the serve loop stops and the process
//!   exits with status 0

use tokio::signal;

/// Resolve when the process receives Ctrl+C (SIGINT) or, on Unix, SIGTERM.
///
/// Passed to the server's graceful shutdown hook so that termination by an
/// external signal ends the serve loop instead of killing the process
/// mid-flight.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
