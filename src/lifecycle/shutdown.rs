//! Shutdown coordination for embedded servers.
//!
//! The process itself shuts down via OS signals (see `signals`). This
//! coordinator exists for callers that embed the server, integration tests
//! mostly, and need to stop it without sending a signal.

use tokio::sync::broadcast;

/// Coordinator for programmatic shutdown.
///
/// Wraps a broadcast channel: the holder triggers once, every subscribed
/// serve task observes it.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
