//! Per-field view data for rendering the form

use chrono::NaiveDate;
use shared::models::{Department, EmployeeField};

/// How a field is entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Choice among fixed options; the empty value is the placeholder
    Select { options: Vec<&'static str> },
    /// Date picker limited to `max`
    Date { max: NaiveDate },
}

impl InputKind {
    pub fn for_field(field: EmployeeField, max_date: NaiveDate) -> Self {
        match field {
            EmployeeField::Department => InputKind::Select {
                options: Department::ALL.iter().map(|d| d.as_str()).collect(),
            },
            EmployeeField::DateOfJoining => InputKind::Date { max: max_date },
            _ => InputKind::Text,
        }
    }
}

/// Everything a renderer needs for one labeled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field: EmployeeField,
    pub label: &'static str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub kind: InputKind,
}

impl FieldView<'_> {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
