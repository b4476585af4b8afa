pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;

use anyhow::Context;
use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the complete router with docs attached
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    // ==========================================================================
    // Public Routes (no auth required)
    // ==========================================================================
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/pages", get(handlers::get_page))
        .route("/commission/preview", get(handlers::get_commission_preview));

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server, returns after Ctrl-C
pub async fn run_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("🚀 Gateway listening on http://{}", addr);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
