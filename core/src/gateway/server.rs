//! Gateway Server - Axum HTTP server

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::gateway::handlers;
use crate::watson::ConversationProvider;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ConversationProvider>,
}

/// Gateway server instance
pub struct GatewayServer {
    host: String,
    port: u16,
    state: AppState,
}

impl GatewayServer {
    pub fn new(host: String, port: u16, provider: Arc<dyn ConversationProvider>) -> Self {
        Self {
            host,
            port,
            state: AppState { provider },
        }
    }

    /// Build the gateway router with CORS and request tracing applied
    pub fn router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // Health check
            .route("/healthz", get(health_check_handler))
            .route("/health", get(health_check_handler))
            // Watson gateway endpoints
            .route("/api/watson/session", post(handlers::create_session))
            .route("/api/watson/message", post(handlers::send_message))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the gateway server (blocking)
    pub async fn run(self) -> anyhow::Result<()> {
        let app = Self::router(self.state);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Gateway listening on {}", addr);

        // Handle graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
