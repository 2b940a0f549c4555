//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;

use sharebox_auth::password::PasswordHasher;
use sharebox_core::config::AppConfig;
use sharebox_core::error::AppError;
use sharebox_database::MemoryUserRepository;
use sharebox_storage::{LocalProvisioner, TimestampIdGenerator};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Runs the Sharebox server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Sharebox server...");
    if config.auth.uses_default_secret() {
        tracing::warn!(
            "auth.token_secret is the shipped default; session tokens can be forged until it is changed"
        );
    }

    tracing::info!(root = %config.storage.root, "Initializing home folder storage...");
    let provisioner = Arc::new(LocalProvisioner::new(&config.storage.root).await?);
    tracing::debug!(root = %provisioner.root().display(), "Home folder root ready");

    let user_repo = Arc::new(MemoryUserRepository::new());
    let ids = Arc::new(TimestampIdGenerator::new());
    let hasher = Arc::new(PasswordHasher::new());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::build(config, user_repo, provisioner, ids, hasher);

    tracing::info!("Seeding built-in users...");
    state.admin_user_service.ensure_builtin_users().await?;

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Sharebox server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Sharebox server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
