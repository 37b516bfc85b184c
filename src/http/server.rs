//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum Router with an explicit route table
//! - Hold the immutable application state shared with handlers
//! - Wire up middleware (tracing)
//! - Serve the bound listener until shutdown
//!
//! # Design Decisions
//! - The route table is explicit: `GET /` is the only registered route and
//!   everything else lands in registered fallback handlers, so the 404
//!   behavior is visible in code rather than framework defaults
//! - Responses are formatted per request; byte-identical replays follow
//!   from the configuration being immutable, not from caching

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::response::greeting_page;

/// Application state injected into handlers.
///
/// Everything in here is resolved at startup and never mutated, so
/// concurrent requests share it without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// HTTP server for the greeting responder.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            config: Arc::new(config),
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router: one route plus the default handlers.
    ///
    /// The fallback on the method router answers unregistered methods on
    /// `/`; the fallback on the router answers unmatched paths. Both reply
    /// 404 so every request outside the registered route gets the same
    /// answer.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(greeting).fallback(not_found))
            .fallback(not_found)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until `shutdown` resolves, then returns once the accept loop
    /// has stopped. A signalled process can then exit cleanly.
    pub async fn run<S>(self, listener: TcpListener, shutdown: S) -> Result<(), std::io::Error>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server running"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handler for `GET /`: the greeting page.
async fn greeting(State(state): State<AppState>) -> Html<String> {
    Html(greeting_page(&state.config.greeting.db_password))
}

/// Default handler for every unmatched path or method.
async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::debug!(uri = %uri, "No route matched");
    (StatusCode::NOT_FOUND, "Not Found")
}
