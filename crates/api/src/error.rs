use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinedex_core::error::CoreError;
use serde_json::json;

use crate::response::ResultBody;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Renders the same `{ "result": {...} }` envelope as successful responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed path or query string.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and `result` object for this error.
    pub fn result_body(&self) -> (StatusCode, ResultBody) {
        match self {
            AppError::Core(core) => match core {
                CoreError::InvalidParameter(result) | CoreError::NotFound(result) => (
                    StatusCode::from_u16(result.http_status())
                        .unwrap_or(StatusCode::BAD_REQUEST),
                    ResultBody::from(*result),
                ),
                CoreError::Unauthorized(msg) => {
                    plain(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::BadRequest(msg) => plain(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, result) = self.result_body();
        (status, axum::Json(json!({ "result": result }))).into_response()
    }
}

/// A failure outside the catalog; its numeric code is the HTTP status.
fn plain(status: StatusCode, name: &'static str, message: String) -> (StatusCode, ResultBody) {
    (
        status,
        ResultBody {
            code: status.as_u16(),
            name,
            message,
            status: status.as_u16(),
        },
    )
}

/// Sanitized 500. Driver and internal detail stays in the logs.
fn internal() -> (StatusCode, ResultBody) {
    plain(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
