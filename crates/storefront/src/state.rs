//! Application state shared across handlers.

use std::sync::Arc;

use treasured_touch_catalog::CatalogStore;

use crate::config::StorefrontConfig;
use crate::sessions::SessionRegistry;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog repository, the session registry, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    sessions: SessionRegistry,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The catalog and registry are passed in rather than built here, so
    /// tests can wire in temp directories or an in-memory stash.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: CatalogStore, sessions: SessionRegistry) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                sessions,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog repository.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the session registry.
    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.inner.sessions
    }
}
