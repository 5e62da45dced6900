//! Application error type and its HTTP rendering

use super::codes::ErrorCode;
use crate::response::{ErrorBody, ValidationErrorBody};
use crate::validation::{FieldViolation, ValidationFailure};
use http::StatusCode;
use thiserror::Error;

/// Application error with structured error code and field violations
///
/// This is the primary error type crossing the HTTP boundary:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable message (never sent to the caller for system errors)
/// - Per-field violations for validation failures
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field-level violations (validation errors only)
    pub violations: Vec<FieldViolation>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            violations: Vec::new(),
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Attach field violations to this error
    pub fn with_violations(mut self, violations: Vec<FieldViolation>) -> Self {
        self.violations = violations;
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        Self::new(ErrorCode::EmployeeInvalid).with_violations(failure.into_violations())
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
            return (status, Json(ErrorBody::internal())).into_response();
        }

        if status == StatusCode::BAD_REQUEST {
            let errors = if self.violations.is_empty() {
                vec![FieldViolation::general(self.message)]
            } else {
                self.violations
            };
            return (status, Json(ValidationErrorBody { errors })).into_response();
        }

        (status, Json(ErrorBody::new(self.message))).into_response()
    }
}
