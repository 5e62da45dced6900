//! Unified error system for Roster
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Error type with code, message and field violations
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InternalError);
//! assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
//!
//! let err = AppError::invalid_request("Malformed JSON body");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::AppError;
