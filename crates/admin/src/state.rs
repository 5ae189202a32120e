//! Application state shared across handlers.

use std::sync::Arc;

use treasured_touch_catalog::CatalogStore;

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the catalog
/// repository the admin panel writes through.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: CatalogStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The catalog is passed in rather than built here, so tests can wire in
    /// a temp directory.
    #[must_use]
    pub fn new(config: AdminConfig, catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog repository.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }
}
