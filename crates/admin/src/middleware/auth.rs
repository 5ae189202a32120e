//! Bearer-token gate for the admin API.
//!
//! When `ADMIN_API_TOKEN` is configured, every `/api` request must carry
//! `Authorization: Bearer <token>`. When it is not configured the gate waves
//! requests through, which is only acceptable behind a trusted network
//! boundary.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;

use crate::error::AdminError;
use crate::state::AppState;

/// Middleware that checks the bearer token on API routes.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config().api_token.as_ref() else {
        return next.run(request).await;
    };

    match bearer_token(request.headers()) {
        Some(token) if token == expected.expose_secret() => next.run(request).await,
        Some(_) => AdminError::Unauthorized("invalid bearer token".to_string()).into_response(),
        None => AdminError::Unauthorized("missing bearer token".to_string()).into_response(),
    }
}

/// Pull the token out of an `Authorization: Bearer ...` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
