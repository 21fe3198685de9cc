use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("authentication error: {0}")]
    AuthError(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::NotFound(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        warn!(error = ?self, %status, "request failed");

        // Error bodies are plain text; success bodies are JSON.
        (status, self.message().to_owned()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_their_status_codes() {
        let cases = [
            (
                AppError::ValidationError("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::AuthError("Unauthorized".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::NotFound("Event not found".into()),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
        }
    }

    #[test]
    fn response_body_is_the_bare_message() {
        let error = AppError::NotFound("Event not found".into());
        assert_eq!(error.message(), "Event not found");
    }
}
