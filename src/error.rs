//! Unified error types for the info service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Unified error type for the info service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (binding the listener, serving connections).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("{0}")]
    Env(#[from] envy::Error),

    /// A value parsed but is not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Host introspection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SystemInfoError {
    /// The OS did not report a hostname.
    #[error("hostname lookup unavailable")]
    HostnameUnavailable,
}

/// Errors surfaced to HTTP clients.
///
/// Every variant renders a fixed body. Internal detail is logged and never
/// leaves the process.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matched the request.
    #[error("endpoint does not exist: {path}")]
    NotFound {
        /// Requested path.
        path: String,
    },

    /// Unexpected fault while handling a request.
    #[error("internal fault: {0}")]
    Internal(String),
}

impl From<SystemInfoError> for ApiError {
    fn from(err: SystemInfoError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// JSON body shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short error title.
    pub error: &'static str,
    /// Human-readable message.
    pub message: &'static str,
}

impl ErrorBody {
    /// Body for unmatched routes.
    pub const NOT_FOUND: ErrorBody = ErrorBody {
        error: "Not Found",
        message: "Endpoint does not exist",
    };

    /// Body for internal faults.
    pub const INTERNAL: ErrorBody = ErrorBody {
        error: "Internal Server Error",
        message: "An unexpected error occurred",
    };
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::NotFound { .. } => ErrorBody::NOT_FOUND,
            ApiError::Internal(_) => ErrorBody::INTERNAL,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("500 Internal Server Error: {}", detail);
        }
        (self.status(), Json(self.body())).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
