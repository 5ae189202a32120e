//! Unified error handling for the admin API.
//!
//! Handlers return `Result<T, AdminError>`; the error maps to a status code
//! plus a JSON `{"error": ..., "details": ...}` body. Validation problems
//! carry their details back to the caller; internal failures are logged and
//! reported without specifics.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use treasured_touch_catalog::CatalogError;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Request is missing or carrying a bad bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        // A rejected catalog list is the caller's problem, everything else
        // from the catalog is ours.
        if let Self::Catalog(CatalogError::Invalid(details)) = &self {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Catalog data failed validation", "details": details })),
            )
                .into_response();
        }

        if matches!(self, Self::Catalog(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Admin request error");
        }

        let status = match &self {
            Self::Catalog(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Catalog(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AdminError`.
pub type Result<T> = std::result::Result<T, AdminError>;
