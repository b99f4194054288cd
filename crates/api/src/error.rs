use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cinelens_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and implements
/// [`IntoResponse`] to produce consistent JSON error responses. Note
/// that generation and parse failures never reach this type in the
/// analyze-scene path; the handler masks them with the fallback
/// payload. Only validation errors surface to callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinelens_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
                }
                // Parse/generation errors are absorbed by the fallback
                // policy before they could get here; map defensively.
                other => {
                    tracing::error!(error = %other, "Internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
