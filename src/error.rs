//! Application error type and HTTP response mapping.
//!
//! Every service failure is one of a closed set of variants. The HTTP layer
//! matches on the variant, never on the message text.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON envelope for error responses.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload: `{"code", "message", "details"}`.
#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// The closed set of service errors.
///
/// The first four variants map to `400 Bad Request` at the public surface;
/// only [`AppError::Internal`] maps to `500`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input could not be parsed as an absolute URL.
    #[error("{message}")]
    InvalidFormat { message: String, details: Value },

    /// DNS resolution of the target hostname yielded no address.
    #[error("{message}")]
    InvalidHostname { message: String, details: Value },

    /// A record already exists for the given original URL.
    #[error("{message}")]
    DuplicateUrl { message: String, details: Value },

    /// No record matches the given short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Database or other unexpected failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_format(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_hostname(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidHostname {
            message: message.into(),
            details,
        }
    }
    pub fn duplicate_url(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateUrl {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::InvalidFormat { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_format", message, details)
            }
            AppError::InvalidHostname { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_hostname",
                message,
                details,
            ),
            AppError::DuplicateUrl { message, details } => {
                (StatusCode::BAD_REQUEST, "duplicate_url", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::BAD_REQUEST, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// A unique violation means an insert lost the check-then-insert race; the
/// condition is the same one the pre-check guards, so it surfaces as
/// [`AppError::DuplicateUrl`].
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::duplicate_url(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::invalid_format(
            "Request validation failed",
            json!({ "reason": e.to_string() }),
        )
    }
}
