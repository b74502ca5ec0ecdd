//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// Completion messages carry these values across task boundaries, so every
/// variant is `Clone`.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Network-level failure (DNS resolution, connection refused, ...)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The HTTP request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The API answered with a non-success status
    #[error("API error: HTTP {status} - {message}")]
    ApiError { status: u16, message: String },

    /// The API answered with a body we could not decode
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether this is expected behavior (bad user input, client-side request
    /// errors) — used for log level classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) => true,
            Self::ApiError { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
