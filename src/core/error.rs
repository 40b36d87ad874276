//! Error type system for Authgate
//!
//! Provides a single error enum with HTTP status code mapping and a JSON
//! error response carrying a trace ID.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Main error type for the Authgate system
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Password rejected: {0}")]
    PasswordRejected(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Crypto error: {0}")]
    CryptoError(String),

    #[error("Task error: {0}")]
    TaskError(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::InvalidRequest(_)
            | GateError::IncorrectPassword
            | GateError::ValidationError(_) => StatusCode::BAD_REQUEST,

            GateError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,

            GateError::NotFound(_) => StatusCode::NOT_FOUND,

            GateError::PasswordRejected(_) => StatusCode::NOT_ACCEPTABLE,

            GateError::ConfigError(_)
            | GateError::DatabaseError(_)
            | GateError::TokenError(_)
            | GateError::CryptoError(_)
            | GateError::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            GateError::ConfigError(_) => "ConfigError",
            GateError::DatabaseError(_) => "DatabaseError",
            GateError::InvalidRequest(_) => "InvalidRequest",
            GateError::IncorrectPassword => "IncorrectPassword",
            GateError::Unauthenticated(_) => "Unauthenticated",
            GateError::NotFound(_) => "NotFound",
            GateError::PasswordRejected(_) => "PasswordRejected",
            GateError::ValidationError(_) => "ValidationError",
            GateError::TokenError(_) => "TokenError",
            GateError::CryptoError(_) => "CryptoError",
            GateError::TaskError(_) => "TaskError",
        }
    }
}

/// Error response structure for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique trace ID for this error
    pub trace_id: String,
}

impl ErrorResponse {
    /// Create a new error response with a generated trace ID
    pub fn new(error: String, message: String) -> Self {
        Self {
            error,
            message,
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an error response from a GateError
    pub fn from_error(error: &GateError) -> Self {
        Self::new(error.error_type().to_string(), error.to_string())
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = ErrorResponse::from_error(&self);

        tracing::error!(
            error_type = self.error_type(),
            trace_id = %error_response.trace_id,
            status_code = %status_code,
            "Request failed: {}",
            self
        );

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can fail with GateError
pub type Result<T> = std::result::Result<T, GateError>;
