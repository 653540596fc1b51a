//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - departments(id, name)
//! - roles(id, title, salary, department_id)
//! - employees(id, first_name, last_name, role_id, manager_id)
//!
//! Referential integrity is left to the declared foreign keys.

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, SqliteStore};
