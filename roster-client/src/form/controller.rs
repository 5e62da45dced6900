//! Employee form controller
//!
//! Headless state for one employee form: current values, inline errors,
//! the joining-date picker and the outcome of the last submission.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Department, Employee, EmployeeDraft, EmployeeField, NewEmployee};
use shared::response::EmployeeCreated;
use shared::validation::{FieldViolation, ValidationFailure};

use super::date_picker::{DatePickError, DatePicker};
use super::field::{FieldView, InputKind};
use crate::{ClientError, ClientResult, HttpClient};

/// Shown when a submission fails without field-level detail
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not save the employee. Please try again.";

/// Sends a checked draft to the record endpoint
#[async_trait]
pub trait EmployeeSubmitter: Send + Sync {
    async fn submit(&self, draft: &EmployeeDraft) -> ClientResult<EmployeeCreated>;
}

#[async_trait]
impl EmployeeSubmitter for HttpClient {
    async fn submit(&self, draft: &EmployeeDraft) -> ClientResult<EmployeeCreated> {
        self.create_employee(draft).await
    }
}

/// What the form currently shows besides field errors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Local validation blocked the submit
    Invalid,
    /// Request in flight
    Submitting,
    /// Server stored the record; the form has been cleared
    Saved { message: String, employee: Employee },
    /// Server returned field errors
    Rejected,
    /// Transport or server failure without field detail
    Failed { message: String },
}

/// Result of one [`EmployeeForm::submit`] call
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked locally; nothing was sent
    Invalid(ValidationFailure),
    Saved(EmployeeCreated),
    Rejected(Vec<FieldViolation>),
    Failed(ClientError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    draft: EmployeeDraft,
    errors: BTreeMap<EmployeeField, String>,
    /// Errors not tied to a field (e.g. malformed payload)
    form_errors: Vec<String>,
    picker: DatePicker,
    status: FormStatus,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form whose date picker stops at `max` instead of today
    pub fn with_max_date(max: NaiveDate) -> Self {
        Self {
            picker: DatePicker::with_max(max),
            ..Self::default()
        }
    }

    // ========== Values ==========

    pub fn value(&self, field: EmployeeField) -> &str {
        self.draft.get(field)
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Update a value; the field's inline error goes away until the next check
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
        self.errors.remove(&field);
        if field == EmployeeField::DateOfJoining {
            self.picker.clear();
        }
    }

    pub fn select_department(&mut self, department: Department) {
        self.set(EmployeeField::Department, department.as_str());
    }

    /// Choose the joining date through the picker
    pub fn pick_date(&mut self, date: NaiveDate) -> Result<(), DatePickError> {
        let iso = self.picker.pick(date)?;
        self.draft.date_of_joining = iso;
        self.errors.remove(&EmployeeField::DateOfJoining);
        Ok(())
    }

    pub fn picked_date(&self) -> Option<NaiveDate> {
        self.picker.selected()
    }

    // ========== Errors & status ==========

    pub fn error(&self, field: EmployeeField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.form_errors.is_empty()
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// One view per field, in declaration order
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        let max = self.picker.max();
        EmployeeField::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                value: self.draft.get(field),
                error: self.error(field),
                kind: InputKind::for_field(field, max),
            })
            .collect()
    }

    fn show_violations(&mut self, violations: &[FieldViolation]) {
        self.errors.clear();
        self.form_errors.clear();
        for violation in violations {
            match violation.field() {
                Some(field) => {
                    self.errors
                        .entry(field)
                        .or_insert_with(|| violation.message.clone());
                }
                None => self.form_errors.push(violation.message.clone()),
            }
        }
    }

    // ========== Actions ==========

    /// Run the shared schema and show its errors inline
    pub fn validate(&mut self) -> Result<NewEmployee, ValidationFailure> {
        let result = self.draft.check();
        match &result {
            Ok(_) => {
                self.errors.clear();
                self.form_errors.clear();
            }
            Err(failure) => self.show_violations(failure.violations()),
        }
        result
    }

    /// Validate, then send the draft once
    ///
    /// The form stays mutably borrowed until the response arrives, so a
    /// second submit of the same form cannot overlap the first.
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome
    where
        S: EmployeeSubmitter + ?Sized,
    {
        if let Err(failure) = self.validate() {
            tracing::debug!(violations = failure.violations().len(), "Submit blocked by validation");
            self.status = FormStatus::Invalid;
            return SubmitOutcome::Invalid(failure);
        }

        self.status = FormStatus::Submitting;
        match submitter.submit(&self.draft).await {
            Ok(created) => {
                tracing::info!(id = created.new_employee.id, "Employee saved");
                self.reset();
                self.status = FormStatus::Saved {
                    message: created.message.clone(),
                    employee: created.new_employee.clone(),
                };
                SubmitOutcome::Saved(created)
            }
            Err(ClientError::Validation(violations)) if !violations.is_empty() => {
                tracing::info!(violations = violations.len(), "Server rejected employee");
                self.show_violations(&violations);
                self.status = FormStatus::Rejected;
                SubmitOutcome::Rejected(violations)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Employee submission failed");
                self.status = FormStatus::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                };
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Clear values, errors, status and the picked date
    pub fn reset(&mut self) {
        self.draft = EmployeeDraft::default();
        self.errors.clear();
        self.form_errors.clear();
        self.picker.clear();
        self.status = FormStatus::Idle;
    }
}
