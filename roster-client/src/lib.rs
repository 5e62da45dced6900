//! Roster Client - employee intake form and HTTP client for roster-server
//!
//! The form validates with the same schema the server enforces, then posts
//! the record through [`HttpClient`].

pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{EmployeeForm, EmployeeSubmitter, FormStatus, SubmitOutcome};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Department, Employee, EmployeeDraft, EmployeeField};
pub use shared::response::EmployeeCreated;
