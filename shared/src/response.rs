//! API response bodies
//!
//! Wire shapes of `POST /api/employees`:
//!
//! ```json
//! 201 { "message": "Employee added successfully", "newEmployee": { "id": 1, ... } }
//! 400 { "errors": [ { "path": ["email"], "message": "Invalid email format" } ] }
//! 500 { "error": "Internal Server Error" }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Employee;
use crate::validation::FieldViolation;

/// Success message for a created employee
pub const EMPLOYEE_CREATED_MESSAGE: &str = "Employee added successfully";

/// Generic failure message; internal detail is never exposed
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// 201 body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreated {
    pub message: String,
    pub new_employee: Employee,
}

impl EmployeeCreated {
    pub fn new(employee: Employee) -> Self {
        Self {
            message: EMPLOYEE_CREATED_MESSAGE.to_string(),
            new_employee: employee,
        }
    }
}

/// 400 body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldViolation>,
}

/// Body for every other failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE)
    }
}
