//! Session-cookie authentication. Credentials live in the data store; live
//! sessions live in [`SessionStore`]. Handlers that need an identity take a
//! [`CurrentUser`] argument and get the 401 for free.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;
use crate::utils::error::AppError;

pub mod session;

pub use session::{SessionStore, SESSION_COOKIE};

/// Identity established by the session cookie.
///
/// Extraction fails with `401 Unauthorized` when the cookie is absent,
/// unparseable, or no longer maps to a live session.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i32,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session::token_from_headers(&parts.headers)
            .ok_or_else(|| AppError::AuthError("Unauthorized".to_string()))?;

        let id = state
            .sessions
            .user_id(token)
            .await
            .ok_or_else(|| AppError::AuthError("Unauthorized".to_string()))?;

        Ok(CurrentUser { id })
    }
}
