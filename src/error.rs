//! Error Types
//!
//! `ApiError` is what handlers return; actix turns it into a JSON
//! `{"detail": ...}` response. `LoadError` only happens at startup.

use actix_web::{http::header, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to API callers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or unknown bearer identity, or bad login credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Unknown career, metric or persona key in the mock store
    #[error("{0}")]
    NotFound(String),

    /// The mock document has a record of the wrong shape
    #[error("Malformed mock data: {0}")]
    MalformedData(String),
}

impl ApiError {
    pub fn unauthorized(detail: &str) -> Self {
        ApiError::Unauthorized(detail.to_string())
    }

    pub fn not_found(detail: &str) -> Self {
        ApiError::NotFound(detail.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self, ApiError::Unauthorized(_)) {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

/// Failure to load the mock data document at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse mock data JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Mock data root must be a JSON object")]
    NotAnObject,
}

impl From<LoadError> for std::io::Error {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io { source, .. } => source,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}
