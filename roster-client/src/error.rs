//! Client error types

use shared::validation::FieldViolation;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never completed (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the record with per-field violations
    #[error("Validation error: {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Server failed without structured detail
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Field violations, when the server returned structured errors
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
