//! Client-durable storage for session collections.
//!
//! The stash is the storefront's equivalent of browser local storage: a
//! key-value store of serialized entry lists, persisted across server
//! restarts. The contract the collections rely on:
//!
//! - [`Stash::load`] never fails - an absent key and an unreadable or
//!   malformed payload both hydrate as an empty list, with a warning logged.
//! - [`Stash::save`] is best-effort - a failed write is logged and swallowed,
//!   and the in-memory collection stays authoritative for the session.
//! - Only raw entry lists are stored. Aggregates are recomputed on
//!   hydration, so they can never desynchronize from the entries across a
//!   restart.

mod file;
mod memory;

pub use file::FileStash;
pub use memory::MemoryStash;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use treasured_touch_core::types::SessionId;

/// Fixed storage keys, one per collection.
pub mod keys {
    /// Key for the persisted cart line list.
    pub const CART: &str = "cart-storage";

    /// Key for the persisted favourites item list.
    pub const FAVOURITES: &str = "favourites-storage";
}

/// Storage key for one collection of one session.
#[must_use]
pub fn session_key(session_id: SessionId, name: &str) -> String {
    format!("{session_id}/{name}")
}

/// Errors from the raw storage backend.
#[derive(Debug, Error)]
pub enum StashError {
    /// Reading or writing the backing storage failed.
    #[error("stash I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters the backend refuses to map to storage.
    #[error("invalid stash key: {0}")]
    InvalidKey(String),
}

/// Raw key-value storage for serialized entry lists.
pub trait StashBackend: Send + Sync {
    /// Read the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StashError`] when the key is invalid or the read fails for
    /// a reason other than absence.
    fn read(&self, key: &str) -> Result<Option<String>, StashError>;

    /// Store `payload` under `key`, replacing any previous payload.
    ///
    /// # Errors
    ///
    /// Returns a [`StashError`] when the key is invalid or the write fails.
    fn write(&self, key: &str, payload: &str) -> Result<(), StashError>;
}

/// The persistence adapter handed to session state.
///
/// Wraps a backend with the load/save contract described in the module docs,
/// so callers never handle storage errors inline with collection mutations.
#[derive(Clone)]
pub struct Stash {
    backend: Arc<dyn StashBackend>,
}

impl Stash {
    /// Create a stash over `backend`.
    pub fn new(backend: impl StashBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Load the entry list stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let payload = match self.backend.read(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted entries");
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(key, error = %err, "persisted entries are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Store `entries` under `key`, best-effort.
    pub fn save<T: Serialize>(&self, key: &str, entries: &[T]) {
        let payload = match serde_json::to_string(entries) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to serialize entries");
                return;
            }
        };
        if let Err(err) = self.backend.write(key, &payload) {
            tracing::warn!(key, error = %err, "failed to persist entries");
        }
    }
}
