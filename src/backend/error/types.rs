/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Invalid request format
 * - Rejected email-token or credential input
 *
 * ## Upstream Errors
 *
 * Upstream errors are failures in the collaborators this layer calls through:
 * - Token store / database queries (sqlx)
 * - Outbound mail dispatch (lettre)
 * - Token signing (jsonwebtoken)
 *
 * They propagate uncaught to the enclosing handler and surface as a
 * generic failed response. There is no local retry.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request input)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Token store / database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token signing or decoding error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Mail message construction error
    #[error("Mail build error: {0}")]
    MailBuild(#[from] lettre::error::Error),

    /// Mail address parse error
    #[error("Mail address error: {0}")]
    MailAddress(#[from] lettre::address::AddressError),

    /// SMTP dispatch error
    #[error("Mail transport error: {0}")]
    MailTransport(#[from] lettre::transport::smtp::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - everything else - 500 Internal Server Error (upstream failure)
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// Upstream failures deliberately collapse to a generic message so the
    /// response body never leaks store or mail-provider details.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            _ => "internal server error".to_string(),
        }
    }
}
