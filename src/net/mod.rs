//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured bind address
//!     → listener.rs (single bind attempt, startup announcement)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal; there is no retry or fallback port
//! - Accepting and connection handling belong to the HTTP layer (axum)

pub mod listener;

pub use listener::{bind, ListenerError};
