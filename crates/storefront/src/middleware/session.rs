//! Session cookie middleware.
//!
//! Every request gets a stable session id: parsed from the `tt_session`
//! cookie when present and well-formed, freshly generated otherwise. The id
//! rides request extensions for handlers to extract, and fresh ids are set
//! on the response as an HttpOnly cookie.
//!
//! The cookie carries no signed state - it is only the key under which the
//! session's collections are registered and persisted.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

use treasured_touch_core::types::SessionId;

use crate::state::AppState;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "tt_session";

/// Session cookie lifetime in seconds (7 days).
const SESSION_MAX_AGE_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Middleware that ensures every request carries a session id.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = cookie_session_id(request.headers());
    let session_id = existing.unwrap_or_else(SessionId::generate);
    request.extensions_mut().insert(session_id);

    let mut response = next.run(request).await;

    if existing.is_none() {
        let secure = if state.config().is_secure() {
            "; Secure"
        } else {
            ""
        };
        let cookie = format!(
            "{SESSION_COOKIE_NAME}={session_id}; Path=/; Max-Age={SESSION_MAX_AGE_SECONDS}; HttpOnly; SameSite=Lax{secure}"
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Parse the session id out of the request's cookie headers.
fn cookie_session_id(headers: &axum::http::HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .and_then(|(_, value)| value.trim().parse().ok())
}
