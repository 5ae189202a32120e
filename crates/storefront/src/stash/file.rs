//! File-backed stash: one JSON file per key under a root directory.

use std::fs;
use std::path::PathBuf;

use super::{StashBackend, StashError};

/// Stores each key as `<root>/<key>.json`.
///
/// Keys may contain `/` separators (session namespacing maps to
/// subdirectories) but are otherwise restricted to a filename-safe alphabet,
/// so a key can never address a path outside the root.
pub struct FileStash {
    root: PathBuf,
}

impl FileStash {
    /// Create a file stash rooted at `root`.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StashError> {
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/'))
            && key.split('/').all(|segment| !segment.is_empty());
        if !safe {
            return Err(StashError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StashBackend for FileStash {
    fn read(&self, key: &str) -> Result<Option<String>, StashError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StashError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash mid-write can't corrupt the previous
        // payload; a corrupt file would otherwise silently empty the cart on
        // the next visit.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
