//! Catalog repository errors.

use thiserror::Error;

/// Errors surfaced by [`crate::CatalogStore`] write operations.
///
/// Reads never return this type: an absent or unreadable file is reported as
/// an empty list, with a warning in the log.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading or writing a catalog file failed.
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record list could not be serialized.
    #[error("catalog serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The submitted record list failed validation.
    #[error("invalid catalog data: {0}")]
    Invalid(String),
}
