//! HTTP server for the classification API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::Result;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(state: AppState, addr: String) -> Self {
        Self {
            state: Arc::new(state),
            addr,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // Any origin, method and header, with credentials. Origin and
        // headers are mirrored since "*" is not allowed alongside credentials.
        let cors = CorsLayer::very_permissive();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/classify", post(handlers::classify))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let router = self.router();

        info!("Starting API server on {}", listener.local_addr()?);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
