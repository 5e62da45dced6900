//! Unified service-layer error type for roster-server
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`, `BoxError`) and
//! schema rejections to the API-layer error (`AppError`), so handlers can
//! use `?` throughout.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use shared::validation::ValidationFailure;

use crate::BoxError;

/// Service-layer error
///
/// - `Db`: Database/infrastructure errors (logged, mapped to InternalError)
/// - `App`: Business-rule errors (passed through to the client)
#[derive(Debug)]
pub enum ServiceError {
    /// Database or infrastructure error
    Db(BoxError),
    /// Error that already carries the right ErrorCode
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ValidationFailure> for ServiceError {
    fn from(e: ValidationFailure) -> Self {
        ServiceError::App(e.into())
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
