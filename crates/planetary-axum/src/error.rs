//! Axum-specific error types and mappings.
//!
//! This module provides the adapter error type and the mapping from
//! `CoreError` to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use planetary_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::InvalidParameter(msg) => HttpError::BadRequest(msg),
            CoreError::InvalidIdentifier(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: HttpError = CoreError::Validation("empty name".to_string()).into();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn test_invalid_identifier_maps_to_bad_request() {
        let err: HttpError = CoreError::InvalidIdentifier("'abc'".to_string()).into();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn test_already_exists_maps_to_conflict() {
        let err: HttpError =
            CoreError::Repository(RepositoryError::AlreadyExists("Naboo".to_string())).into();
        assert!(matches!(err, HttpError::Conflict(_)));
    }

    #[test]
    fn test_storage_maps_to_internal() {
        let err: HttpError =
            CoreError::Repository(RepositoryError::Storage("pool timed out".to_string())).into();
        assert!(matches!(err, HttpError::Internal(_)));
    }
}
