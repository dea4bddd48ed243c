//! Typed error handling for the order service
//!
//! Validation failures and missing orders are regular handler outcomes, not
//! errors. What remains here are failures that abort a request:
//!
//! - [`StorageError`]: the repository could not complete an operation
//! - [`RequestError`]: the request could not be decoded (bad JSON, bad path)
//!
//! [`ConfigError`] is separate: it only occurs before the server starts.
//!
//! # Example
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! match handler.get(id).await {
//!     Ok(outcome) => println!("{:?}", outcome),
//!     Err(ServiceError::Storage(e)) => eprintln!("store failed: {}", e),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the order service
#[derive(Debug)]
pub enum ServiceError {
    /// Storage backend errors
    Storage(StorageError),

    /// Malformed HTTP requests
    Request(RequestError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Storage(e) => write!(f, "{}", e),
            ServiceError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Storage(e) => Some(e),
            ServiceError::Request(e) => Some(e),
        }
    }
}

/// Client-facing message for every storage failure
pub const STORAGE_FAILURE_MESSAGE: &str = "Storage operation failed";

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Storage(_) => "STORAGE_ERROR",
            ServiceError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    ///
    /// Storage failures carry a fixed message; backend detail only goes to
    /// the log.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ServiceError::Storage(_) => STORAGE_FAILURE_MESSAGE.to_string(),
            ServiceError::Request(e) => e.to_string(),
        };
        ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::Request(RequestError::InvalidPath { path, .. }) => {
                Some(serde_json::json!({ "path": path }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query execution error
    QueryError { backend: String, message: String },

    /// The store rejected the data (constraint violation, unknown id on update)
    IntegrityError { message: String },

    /// Backend not available
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Storage(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised while decoding an HTTP request
#[derive(Debug)]
pub enum RequestError {
    /// Body is not valid JSON for an order
    InvalidJson { message: String },

    /// A path parameter could not be parsed
    InvalidPath { path: String, message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidJson { message } => write!(f, "Invalid JSON: {}", message),
            RequestError::InvalidPath { path, message } => {
                write!(f, "Invalid path '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidJson { .. } => "INVALID_JSON",
            RequestError::InvalidPath { .. } => "INVALID_PATH",
        }
    }
}

impl From<RequestError> for ServiceError {
    fn from(err: RequestError) -> Self {
        ServiceError::Request(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to loading and checking the service configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingField { field: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

/// Repository implementations report failures through `anyhow`
///
/// Typed storage errors are recovered when the chain carries one; anything
/// else is reported as a generic repository failure.
impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => ServiceError::Storage(storage),
            Err(other) => ServiceError::Storage(StorageError::QueryError {
                backend: "repository".to_string(),
                message: format!("{:#}", other),
            }),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => StorageError::Unavailable {
                backend: "PostgreSQL".to_string(),
            },
            sqlx::Error::Io(e) => StorageError::ConnectionError {
                backend: "PostgreSQL".to_string(),
                message: e.to_string(),
            },
            sqlx::Error::Database(e) => StorageError::IntegrityError {
                message: e.to_string(),
            },
            other => StorageError::QueryError {
                backend: "PostgreSQL".to_string(),
                message: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for order service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Tests
// =============================================================================
