//! Error codes for Roster
//!
//! Error codes are organized by category:
//! - 0xxx: Request errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use std::fmt;

/// Error code carried by every [`AppError`](super::AppError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// Body could not be read as JSON
    InvalidRequest = 5,

    // ==================== 8xxx: Employee ====================
    /// Employee record was rejected by the schema
    EmployeeInvalid = 8001,

    // ==================== 9xxx: System ====================
    /// Storage or other unexpected failure
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::EmployeeInvalid => "Employee record is invalid",
            ErrorCode::InternalError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
