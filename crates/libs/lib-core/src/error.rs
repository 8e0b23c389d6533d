//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] following the `thiserror`
//! pattern. Validation verdicts are **not** errors: every rejection the rule
//! chain produces is a successfully computed value rendered into a 200
//! response. `AppError` covers only integration faults (startup
//! configuration, template rendering), which map to HTTP status codes via
//! `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
///
/// Each variant includes a descriptive `String` for context. The `#[error]`
/// attribute from `thiserror` provides the `Display` implementation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTML template rendering failure.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Render error: {0}")]
    Render(String),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Render(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Internal details stay in the server logs.
    pub fn user_message(&self) -> String {
        "An internal error occurred".to_string()
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        tracing::error!("Server error: {}", self);

        let error_code = match self {
            AppError::Config(_) => "Config",
            AppError::Render(_) => "Render",
            AppError::Internal(_) => "Internal",
        };

        let body = Json(json!({
            "error": message,
            "code": error_code,
        }));

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
