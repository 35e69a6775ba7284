//! Error types for the paging fixture
//!
//! Every fallible operation in the crate returns `Result<T, Error>`.
//! Handlers return the same type; `IntoResponse` collapses the variants to a
//! deliberately narrow set of generic HTTP answers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// The main error type for the paging fixture
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    #[error("Not an integer: '{raw}'")]
    InvalidNumber { raw: String },

    #[error("Negative number: '{raw}'")]
    NegativeNumber { raw: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Not found: {path}")]
    NotFound { path: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Token signing failed: {message}")]
    Token { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid number error
    pub fn invalid_number(raw: impl Into<String>) -> Self {
        Self::InvalidNumber { raw: raw.into() }
    }

    /// Create a negative number error
    pub fn negative_number(raw: impl Into<String>) -> Self {
        Self::NegativeNumber { raw: raw.into() }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an unauthorized error
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Create a token signing error
    pub fn token(message: impl Into<String>) -> Self {
        Self::Token {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported as
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidNumber { .. }
            | Error::NegativeNumber { .. }
            | Error::BadRequest { .. }
            | Error::JsonParse(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Check if this error is a client-side request problem
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Result type alias for the paging fixture
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Callers only ever see the status and a fixed body
        let body = match status {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            StatusCode::NOT_FOUND => "Not found",
            _ => {
                tracing::error!(error = %self, "internal server error");
                "Internal server error"
            }
        };

        if status.is_client_error() {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_number("f");
        assert_eq!(err.to_string(), "Not an integer: 'f'");

        let err = Error::negative_number("-1");
        assert_eq!(err.to_string(), "Negative number: '-1'");

        let err = Error::config("missing secret");
        assert_eq!(err.to_string(), "Configuration error: missing secret");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::invalid_number("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::negative_number("-3").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::unauthorized("expired").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(Error::not_found("/x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::config("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        assert!(Error::unauthorized("x").is_client_error());
        assert!(!Error::token("x").is_client_error());
    }

    #[tokio::test]
    async fn test_response_body_hides_detail() {
        let response = Error::negative_number("-1").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Bad request");

        let response = Error::unauthorized("bad signature").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Unauthorized");
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
