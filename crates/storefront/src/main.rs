//! Treasured Touch Storefront - public gift shop API.
//!
//! This binary serves the public-facing storefront API on port 3000.
//!
//! # Architecture
//!
//! - Axum JSON API consumed by the web client
//! - File-backed catalog, shared read-only with the admin binary
//! - Session-scoped cart and favourites collections, persisted per session
//!   to a stash directory so they survive restarts
//!
//! # Security
//!
//! This binary only ever reads the catalog. Catalog writes live in the
//! admin binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treasured_touch_catalog::CatalogStore;
use treasured_touch_storefront::config::StorefrontConfig;
use treasured_touch_storefront::sessions::SessionRegistry;
use treasured_touch_storefront::stash::{FileStash, Stash};
use treasured_touch_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "treasured_touch_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state: catalog reads plus the session stash
    let catalog = CatalogStore::new(&config.data_dir);
    let stash = Stash::new(FileStash::new(&config.stash_dir));
    let sessions = SessionRegistry::new(stash);
    let state = AppState::new(config.clone(), catalog, sessions);

    let app = treasured_touch_storefront::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

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
