//! Error types for the backend
//!
//! Provides unified error handling using thiserror.
//!
//! Every application-level failure is reported inside the response body as
//! `{"success": false, "error": "..."}` with HTTP status 200. Callers are
//! expected to inspect the body, not the status line. Underlying store
//! errors are logged server-side and never returned to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for all request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request field is absent or empty
    #[error("{0}")]
    Validation(String),

    /// No user row matches the given username
    #[error("User not found")]
    UserNotFound,

    /// Password does not match the stored hash
    #[error("Wrong password")]
    WrongPassword,

    /// Hash verification itself failed
    #[error("Auth error")]
    Auth,

    /// Password hashing failed during signup
    #[error("Password hashing error")]
    Hashing,

    /// Delete-by-id affected zero rows
    #[error("Note not found")]
    NoteNotFound,

    /// Store failure, collapsed to a generic per-operation message
    #[error("{0}")]
    Database(&'static str),
}

impl ApiError {
    /// Wraps a store failure: logs the underlying detail, keeps only the
    /// per-operation message for the caller.
    pub fn db(message: &'static str, source: anyhow::Error) -> Self {
        error!(error = %source, "{message}");
        ApiError::Database(message)
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Failure is body-encoded; the status line stays 200
        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::OK, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
