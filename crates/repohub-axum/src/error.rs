//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and mappings
//! from `CoreError` and body rejections to HTTP status codes and bodies.
//! Every error body has the shape `{ "error": "<message>" }`. Errors are
//! reported in the response only; nothing is logged here.

use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use repohub_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The `{id}` path segment is not a hyphenated UUID.
    #[error("Invalid Id")]
    InvalidId,

    /// The id is well formed but no such repository is stored.
    #[error("Repository does not exist")]
    RepositoryNotFound,

    /// Bad request (malformed or mistyped JSON body).
    #[error("{0}")]
    BadRequest(String),
}

impl HttpError {
    /// HTTP status code for this error. Every failure is the caller's.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::RepositoryNotFound | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::InvalidId(_) => Self::InvalidId,
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::RepositoryNotFound,
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for HttpError {
    fn from(rejection: BytesRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
