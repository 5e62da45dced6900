//! Headless employee form
//!
//! Holds values and errors for the intake form and drives a single
//! submission through an [`EmployeeSubmitter`].

pub mod controller;
pub mod date_picker;
pub mod field;

pub use controller::{EmployeeForm, EmployeeSubmitter, FormStatus, GENERIC_FAILURE_MESSAGE, SubmitOutcome};
pub use date_picker::{DatePickError, DatePicker};
pub use field::{FieldView, InputKind};
