//! Shared types for Roster
//!
//! Types used by both the server and the client: the employee model,
//! the validation schema, wire bodies and the error system.

pub mod error;
pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use models::{Department, Employee, EmployeeDraft, EmployeeField, NewEmployee};
pub use response::{EmployeeCreated, ErrorBody, ValidationErrorBody};
pub use validation::{FieldViolation, ValidationFailure};
