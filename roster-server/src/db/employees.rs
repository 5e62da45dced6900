//! Employee database operations (PostgreSQL)

use async_trait::async_trait;
use shared::models::{Employee, NewEmployee};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{BoxError, EmployeeRepository};

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn insert(&self, record: &NewEmployee) -> Result<Employee, BoxError> {
        let employee: Employee = sqlx::query_as(
            r#"
            INSERT INTO employees (
                employee_id, name, email, phone,
                department, date_of_joining, role
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, employee_id, name, email, phone,
                      department, date_of_joining, role
            "#,
        )
        .bind(&record.employee_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.department)
        .bind(record.date_of_joining)
        .bind(&record.role)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }
}
