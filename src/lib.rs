//! # Roster - departments, roles and employees from the terminal
//!
//! Roster is a menu-driven tool over a small relational schema:
//! - SQLite-backed storage with declared foreign keys
//! - Prompt batches behind a `Prompter` trait (terminal or scripted)
//! - One handler per menu action, each a single round trip to the store
//! - Table rendering for the three joined views

pub mod model;
pub mod storage;
pub mod prompt;
pub mod actions;
pub mod app;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use actions::{Action, Outcome};
pub use app::App;
pub use model::{Department, EmployeeView, NewEmployee, NewRole, RoleChange, RoleView, Salary};
pub use prompt::{Prompter, TerminalPrompter};
#[cfg(any(test, feature = "testing"))]
pub use prompt::ScriptedPrompter;
pub use storage::SqliteStore;

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Roster operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Nothing to choose from for '{0}'")]
    EmptyChoices(String),

    #[error("No answer recorded for '{0}'")]
    MissingAnswer(String),
}
