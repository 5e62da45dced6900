//! Employee intake API
//!
//! POST /api/employees — validate and persist one employee record

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use http::StatusCode;
use serde_json::Value;
use shared::error::AppError;
use shared::models::EmployeeDraft;
use shared::response::EmployeeCreated;

use crate::error::ServiceResult;
use crate::state::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServiceResult<(StatusCode, Json<EmployeeCreated>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Unreadable employee payload");
        AppError::invalid_request("Malformed JSON body")
    })?;

    // The client validated too, but only this check is trusted
    let draft = EmployeeDraft::from_json(&payload)?;
    let record = draft.check()?;

    let employee = state.employees.insert(&record).await?;
    tracing::info!(
        id = employee.id,
        employee_id = %employee.employee_id,
        department = %employee.department,
        "Employee added"
    );

    Ok((StatusCode::CREATED, Json(EmployeeCreated::new(employee))))
}
