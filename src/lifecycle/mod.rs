//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Resolve config → Bind listener → Serve
//!     Any failure is fatal: diagnostic, non-zero exit, no retry
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → serve loop ends → process exits 0
//!
//! Programmatic shutdown (shutdown.rs):
//!     Embedding callers trigger a broadcast instead of sending a signal
//! ```
//!
//! # Design Decisions
//! - Two lifecycle states only: starting, then serving until terminated
//! - No drain deadline: stopping the accept loop is the whole shutdown

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
