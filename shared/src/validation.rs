//! Employee validation schema
//!
//! The one definition of the employee field constraints, consumed by the
//! server before persisting and by the form before submitting. Field rules
//! are declared on [`EmployeeDraft`] with `validator`; the date rule needs a
//! clock and is applied here.
//!
//! Every field is checked independently; the result carries at most one
//! violation per field, ordered as [`EmployeeField::ALL`].

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{EmployeeDraft, EmployeeField, NewEmployee};

pub const MAX_EMPLOYEE_ID_LEN: usize = 10;
pub const PHONE_DIGITS: usize = 10;

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_FUTURE_DATE: &str = "Cannot be a future date";
pub const MSG_INVALID_DATE: &str = "Invalid date";
pub const MSG_PHONE: &str = "Must be 10 digits";

/// A single constraint violation, addressed by field path
///
/// `path` is empty for errors that concern the payload as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub path: Vec<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: EmployeeField, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.wire_name().to_string()],
            message: message.into(),
        }
    }

    /// Violation not tied to any field
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// The field this violation points at, if it names one
    pub fn field(&self) -> Option<EmployeeField> {
        self.path.first().and_then(|p| EmployeeField::parse(p))
    }
}

/// Validation outcome for a rejected draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationFailure(Vec<FieldViolation>);

impl ValidationFailure {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }

    /// Message reported for `field`, if any
    pub fn message_for(&self, field: EmployeeField) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.field() == Some(field))
            .map(|v| v.message.as_str())
    }
}

impl From<Vec<FieldViolation>> for ValidationFailure {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }
}

/// Today's date in UTC, the reference for the joining-date rule
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a joining date: `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date
pub fn parse_date_of_joining(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if is_iso_date_shape(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Exactly `YYYY-MM-DD`; chrono alone would also take `2024-1-5`
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `validator` custom rule: exactly ten ASCII digits
pub fn ten_digit_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message(Cow::Borrowed(MSG_PHONE)))
    }
}

fn check_date_of_joining(value: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let date = parse_date_of_joining(value).ok_or(MSG_INVALID_DATE)?;
    if date > today {
        return Err(MSG_FUTURE_DATE);
    }
    Ok(date)
}

/// Flatten `validator` output into ordered violations, one per field
fn collect_violations(errors: &ValidationErrors) -> Vec<(EmployeeField, String)> {
    let by_field = errors.field_errors();
    EmployeeField::ALL
        .into_iter()
        .filter_map(|field| {
            let errs = by_field
                .get(field.ident())
                .or_else(|| by_field.get(field.wire_name()))?;
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((field, message))
        })
        .collect()
}

impl EmployeeDraft {
    /// Validate against today's UTC date
    pub fn check(&self) -> Result<NewEmployee, ValidationFailure> {
        self.check_as_of(today_utc())
    }

    /// Validate with an explicit "today"
    pub fn check_as_of(&self, today: NaiveDate) -> Result<NewEmployee, ValidationFailure> {
        let mut found = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_violations(&errors),
        };

        let date = match check_date_of_joining(&self.date_of_joining, today) {
            Ok(date) => Some(date),
            Err(message) => {
                found.push((EmployeeField::DateOfJoining, message.to_string()));
                None
            }
        };

        match date {
            Some(date_of_joining) if found.is_empty() => Ok(NewEmployee {
                employee_id: self.employee_id.clone(),
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                department: self.department.clone(),
                date_of_joining,
                role: self.role.clone(),
            }),
            _ => {
                found.sort_by_key(|(field, _)| *field);
                Err(found
                    .into_iter()
                    .map(|(field, message)| FieldViolation::new(field, message))
                    .collect::<Vec<_>>()
                    .into())
            }
        }
    }

    /// Decode a draft from arbitrary JSON
    ///
    /// Missing keys are reported as `Required`, non-string values as a type
    /// mismatch. When decoding fails, the fields that did decode are still
    /// checked against the schema so the caller gets every violation at once;
    /// a field's decoding error takes precedence over its rule violation.
    pub fn from_json(value: &Value) -> Result<EmployeeDraft, ValidationFailure> {
        Self::from_json_as_of(value, today_utc())
    }

    /// [`from_json`](Self::from_json) with an explicit "today"
    pub fn from_json_as_of(value: &Value, today: NaiveDate) -> Result<EmployeeDraft, ValidationFailure> {
        let Some(object) = value.as_object() else {
            return Err(vec![FieldViolation::general(format!(
                "Expected object, received {}",
                json_type_name(value)
            ))]
            .into());
        };

        let mut draft = EmployeeDraft::default();
        let mut violations = Vec::new();
        for field in EmployeeField::ALL {
            match object.get(field.wire_name()) {
                Some(Value::String(s)) => *draft.get_mut(field) = s.clone(),
                None => violations.push(FieldViolation::new(field, MSG_REQUIRED)),
                Some(other) => violations.push(FieldViolation::new(
                    field,
                    format!("Expected string, received {}", json_type_name(other)),
                )),
            }
        }

        if violations.is_empty() {
            return Ok(draft);
        }

        if let Err(rules) = draft.check_as_of(today) {
            let undecoded: Vec<_> = violations.iter().filter_map(FieldViolation::field).collect();
            violations.extend(
                rules
                    .into_violations()
                    .into_iter()
                    .filter(|v| v.field().is_some_and(|f| !undecoded.contains(&f))),
            );
            violations.sort_by_key(FieldViolation::field);
        }
        Err(violations.into())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
