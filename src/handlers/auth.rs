use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::auth::{session, CurrentUser};
use crate::models::{NewUser, User};
use crate::state::AppState;
use crate::utils::error::AppError;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `POST /api/register` — create an account and log it straight in.
/// Duplicate usernames are rejected before the store is touched.
pub async fn register(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> Result<Response, AppError> {
    if state
        .store
        .get_user_by_username(&new_user.username)
        .await
        .is_some()
    {
        return Err(AppError::ValidationError(
            "Username already exists".to_string(),
        ));
    }

    let user = state.store.create_user(new_user).await;
    let token = state.sessions.create(user.id).await;

    info!(user_id = user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, session::session_cookie(token))],
        Json(user),
    )
        .into_response())
}

/// `POST /api/login` — establish a session when the credentials match a
/// stored user. Unknown usernames and wrong passwords get the same answer.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Response, AppError> {
    let user = state
        .store
        .get_user_by_username(&credentials.username)
        .await
        .filter(|user| user.password == credentials.password)
        .ok_or_else(|| AppError::AuthError("Unauthorized".to_string()))?;

    let token = state.sessions.create(user.id).await;

    info!(user_id = user.id, username = %user.username, "user logged in");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, session::session_cookie(token))],
        Json(user),
    )
        .into_response())
}

/// `POST /api/logout` — drop the session, if any, and clear the cookie.
/// Safe to call without being logged in.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session::token_from_headers(&headers) {
        state.sessions.destroy(token).await;
    }

    (
        StatusCode::OK,
        [(header::SET_COOKIE, session::clear_session_cookie())],
    )
}

/// `GET /api/user` — the account behind the current session.
pub async fn current_user(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    state
        .store
        .get_user(user.id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::AuthError("Unauthorized".to_string()))
}
