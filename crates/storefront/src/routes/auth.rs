//! Mock authentication routes.
//!
//! Authentication here is a stand-in: any structurally valid email with a
//! non-empty password signs the session in, nothing is checked against a
//! user store, and the user record lives only in the session registry. The
//! surface exists so clients have a stable contract to build against.

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use treasured_touch_core::types::{Email, SessionId};

use crate::error::{AppError, Result};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign the session in. The display name is derived from the email.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<LoginBody>,
) -> Result<Json<CurrentUser>> {
    if body.password.is_empty() {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }
    let email = Email::parse(&body.email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = CurrentUser {
        id: Uuid::new_v4().to_string(),
        name: email.local_part().to_string(),
        email,
    };
    state.sessions().set_user(session_id, Some(user.clone())).await;
    Ok(Json(user))
}

/// Sign the session up with an explicit display name.
#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<SignupBody>,
) -> Result<Json<CurrentUser>> {
    if body.name.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest("name and password are required".to_string()));
    }
    let email = Email::parse(&body.email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = CurrentUser {
        id: Uuid::new_v4().to_string(),
        name: body.name.trim().to_string(),
        email,
    };
    state.sessions().set_user(session_id, Some(user.clone())).await;
    Ok(Json(user))
}

/// Current user for this session, or 401.
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<CurrentUser>> {
    state
        .sessions()
        .read(session_id, |client| client.user.clone())
        .await
        .map(Json)
        .ok_or_else(|| AppError::Unauthorized("not signed in".to_string()))
}

/// Sign the session out.
#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> StatusCode {
    state.sessions().set_user(session_id, None).await;
    StatusCode::NO_CONTENT
}
