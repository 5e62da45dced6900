//! Data models
//!
//! Shared between roster-server and roster-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod employee;

pub use employee::*;
