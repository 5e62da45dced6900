//! Application state for roster-server

use std::sync::Arc;

use http::HeaderValue;

use crate::BoxError;
use crate::config::Config;
use crate::db::{EmployeeRepository, PgEmployeeRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Employee storage
    pub employees: Arc<dyn EmployeeRepository>,
    /// The one origin allowed by CORS
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Build state over an existing repository
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        allowed_origin: &str,
    ) -> Result<Self, BoxError> {
        let allowed_origin = HeaderValue::from_str(allowed_origin)
            .map_err(|e| format!("CORS_ORIGIN is not a valid header value: {e}"))?;
        Ok(Self {
            employees,
            allowed_origin,
        })
    }

    /// Connect to PostgreSQL, run migrations and build state
    pub async fn connect(config: &Config) -> Result<Self, BoxError> {
        let repo =
            PgEmployeeRepository::connect(&config.database_url, config.db_max_connections).await?;
        tracing::info!("Database ready");
        Self::new(Arc::new(repo), &config.cors_origin)
    }
}
