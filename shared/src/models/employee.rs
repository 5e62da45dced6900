//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of an employee record, in declaration order
///
/// Declaration order is the order in which violations are reported and
/// in which the form renders its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    EmployeeId,
    Name,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 7] = [
        EmployeeField::EmployeeId,
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Phone,
        EmployeeField::Department,
        EmployeeField::DateOfJoining,
        EmployeeField::Role,
    ];

    /// JSON key used on the wire (camelCase)
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::EmployeeId => "employeeId",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::DateOfJoining => "dateOfJoining",
            Self::Role => "role",
        }
    }

    /// Rust field name on [`EmployeeDraft`]
    pub const fn ident(&self) -> &'static str {
        match self {
            Self::EmployeeId => "employee_id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::DateOfJoining => "date_of_joining",
            Self::Role => "role",
        }
    }

    /// Human-readable label / placeholder
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EmployeeId => "Employee ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Department => "Department",
            Self::DateOfJoining => "Date of Joining",
            Self::Role => "Role",
        }
    }

    /// Resolve either the wire name or the Rust field name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == name || f.ident() == name)
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Departments offered by the department select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::Hr, Department::Engineering, Department::Marketing];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate employee record as submitted (all fields are strings)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[validate(length(max = 10, message = "Max 10 characters"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "crate::validation::ten_digit_phone"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    /// `YYYY-MM-DD`; checked against the clock by [`EmployeeDraft::check_as_of`]
    pub date_of_joining: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

impl EmployeeDraft {
    /// Read a field by name
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::Name => &self.name,
            EmployeeField::Email => &self.email,
            EmployeeField::Phone => &self.phone,
            EmployeeField::Department => &self.department,
            EmployeeField::DateOfJoining => &self.date_of_joining,
            EmployeeField::Role => &self.role,
        }
    }

    /// Mutable access to a field by name
    pub fn get_mut(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::Name => &mut self.name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Phone => &mut self.phone,
            EmployeeField::Department => &mut self.department,
            EmployeeField::DateOfJoining => &mut self.date_of_joining,
            EmployeeField::Role => &mut self.role,
        }
    }
}

/// Employee record that passed validation, ready to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub role: String,
}

impl NewEmployee {
    /// Attach the identifier assigned by storage
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            employee_id: self.employee_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            date_of_joining: self.date_of_joining,
            role: self.role,
        }
    }
}

/// Persisted employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub role: String,
}
