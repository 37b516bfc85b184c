//! Configuration-driven HTTP greeting server.
//!
//! Serves a single page: `GET /` renders an HTML greeting embedding the
//! `DB_PASSWORD` value resolved from the environment at startup. Every
//! other path or method is answered by an explicit 404 handler.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
