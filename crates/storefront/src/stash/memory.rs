//! In-memory stash backend.
//!
//! Used by tests and available for ephemeral deployments where carts should
//! not outlive the process.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{StashBackend, StashError};

/// A stash backend that keeps payloads in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStash {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStash {
    /// Create an empty in-memory stash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StashBackend for MemoryStash {
    fn read(&self, key: &str) -> Result<Option<String>, StashError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StashError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}
