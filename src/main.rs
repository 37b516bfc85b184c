//! Greeting server binary.
//!
//! A small HTTP responder built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────┐
//!                      │            GREETING SERVER           │
//!                      │                                      │
//!     GET /            │  ┌─────────┐    ┌─────────┐          │
//!     ─────────────────┼─▶│   net   │───▶│  http   │          │
//!                      │  │listener │    │ server  │          │
//!                      │  └─────────┘    └────┬────┘          │
//!                      │                      │               │
//!                      │                      ▼               │
//!     200 text/html    │                ┌──────────┐          │
//!     ◀────────────────┼────────────────│ response │          │
//!                      │                │ renderer │          │
//!                      │                └──────────┘          │
//!                      │                                      │
//!                      │  ┌────────────────────────────────┐  │
//!                      │  │      Cross-Cutting Concerns    │  │
//!                      │  │  ┌────────┐    ┌───────────┐   │  │
//!                      │  │  │ config │    │ lifecycle │   │  │
//!                      │  │  │ (env)  │    │  signals  │   │  │
//!                      │  │  └────────┘    └───────────┘   │  │
//!                      │  └────────────────────────────────┘  │
//!                      └──────────────────────────────────────┘
//! ```
//!
//! Startup order (fail fast, no retries):
//! 1. Initialize the tracing subscriber
//! 2. Resolve configuration from the environment (exactly once)
//! 3. Bind the TCP listener
//! 4. Serve until SIGINT/SIGTERM, then exit 0

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_server::config::AppConfig;
use greeting_server::http::HttpServer;
use greeting_server::lifecycle::shutdown_signal;
use greeting_server::net;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "greeting-server starting");

    // Resolve configuration from the environment. The secret itself is
    // never logged; it is only ever rendered into the page body.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Invalid configuration");
            return Err(error.into());
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = match net::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, "Startup failed");
            return Err(error.into());
        }
    };

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
