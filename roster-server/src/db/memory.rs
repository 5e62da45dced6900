//! In-process employee store

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use shared::models::{Employee, NewEmployee};
use tokio::sync::RwLock;

use super::{BoxError, EmployeeRepository};

/// Employee store held in memory; ids start at 1 like a SERIAL column
#[derive(Clone, Default)]
pub struct MemoryEmployeeRepository {
    rows: Arc<RwLock<Vec<Employee>>>,
    last_id: Arc<AtomicI64>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored row, in insertion order
    pub async fn all(&self) -> Vec<Employee> {
        self.rows.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn insert(&self, record: &NewEmployee) -> Result<Employee, BoxError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let employee = record.clone().into_employee(id);
        self.rows.write().await.push(employee.clone());
        Ok(employee)
    }
}
