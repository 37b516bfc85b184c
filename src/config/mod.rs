//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (resolve variables, apply defaults)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc with the request handlers
//! ```
//!
//! # Design Decisions
//! - The environment is read exactly once at startup; handlers never
//!   re-read it, so every response observes the same values
//! - All fields have defaults; an empty environment yields a working server
//! - A variable that is set but unparseable is a fatal startup error

pub mod loader;
pub mod schema;

pub use loader::{ConfigError, DB_PASSWORD_ENV, HOST_ENV, PORT_ENV};
pub use schema::AppConfig;
pub use schema::GreetingConfig;
pub use schema::ListenerConfig;
