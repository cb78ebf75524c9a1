//! HTTP server assembly.
//!
//! Wires the discovery, health, and MCP sub-application routes into one
//! router and runs it on tokio. All routes except `/` register under the
//! configurable prefix. Handlers share nothing mutable: the only state is an
//! `Arc<Settings>` frozen at startup.

pub mod health;
pub mod metadata;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::mcp;

/// Assemble the application router from immutable settings.
#[must_use]
pub fn create_router(settings: Arc<Settings>) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route(
            metadata::PROTECTED_RESOURCE_METADATA_URI,
            get(metadata::protected_resource_metadata)
                .options(metadata::protected_resource_options),
        )
        .route(
            metadata::AUTHORIZATION_SERVER_METADATA_URI,
            get(metadata::authorization_server_metadata),
        )
        .route(metadata::OPENID_CONFIGURATION_URI, get(metadata::authorization_server_metadata))
        .with_state(Arc::clone(&settings))
        .nest("/mcp", mcp::create_router());

    let api = if settings.prefix.is_empty() {
        api
    } else {
        Router::new().nest(&settings.prefix, api)
    };

    Router::new()
        .route("/", get(health::root))
        .merge(api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(settings: Arc<Settings>, host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let router = create_router(Arc::clone(&settings));

    tracing::info!(
        app = %settings.app_name,
        prefix = %settings.prefix,
        resource = %settings.protected_resource_metadata.resource,
        "HTTP server listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
