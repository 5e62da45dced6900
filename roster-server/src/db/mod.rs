//! Database access layer
//!
//! Handlers reach storage through [`EmployeeRepository`]. Production uses
//! [`PgEmployeeRepository`]; [`MemoryEmployeeRepository`] backs tests and
//! local runs without PostgreSQL.

pub mod employees;
pub mod memory;

pub use employees::PgEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, NewEmployee};

pub use crate::BoxError;

/// Employee persistence
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert one validated record, returning it with its assigned id
    async fn insert(&self, record: &NewEmployee) -> Result<Employee, BoxError>;
}
