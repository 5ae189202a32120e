//! Treasured Touch Admin - internal catalog administration API.
//!
//! This binary serves the admin API on port 3001.
//!
//! # Architecture
//!
//! - Axum JSON API consumed by the admin panel client
//! - File-backed catalog, shared with the storefront binary
//! - Replace/delete semantics per resource list, validated on every write
//!
//! # Security
//!
//! Catalog writes live here and nowhere else. Set `ADMIN_API_TOKEN` to gate
//! the API routes; without it the binary should only listen on a trusted
//! network interface.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treasured_touch_admin::config::AdminConfig;
use treasured_touch_admin::state::AppState;
use treasured_touch_catalog::CatalogStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = AdminConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "treasured_touch_admin=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.api_token.is_none() {
        tracing::warn!("ADMIN_API_TOKEN is not set; the admin API is unauthenticated");
    }

    // Build application state over the shared catalog directory
    let catalog = CatalogStore::new(&config.data_dir);
    let state = AppState::new(config.clone(), catalog);

    let app = treasured_touch_admin::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("admin listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
