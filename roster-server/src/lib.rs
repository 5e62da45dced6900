//! roster-server — employee record intake service
//!
//! One business route, `POST /api/employees`: the JSON body is decoded,
//! re-validated with the shared schema and inserted into PostgreSQL.
//!
//! ```text
//! roster-server/src/
//! ├── api/          # routes, CORS and HTTP middleware stack
//! ├── db/           # EmployeeRepository (PostgreSQL, in-memory)
//! ├── middleware/   # request logging
//! ├── config.rs     # environment configuration
//! ├── error.rs      # ServiceError → AppError bridge
//! └── state.rs      # AppState
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod state;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
