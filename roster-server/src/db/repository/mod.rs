//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod admin;
pub mod counter;
pub mod employee;

// Re-exports
pub use admin::AdminRepository;
pub use counter::{CounterRepository, EMPLOYEE_NUMBER_COUNTER};
pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::validation::ValidationErrors;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Validation(ValidationErrors),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// True when the engine rejected a write because a unique index already
/// holds the value
pub(crate) fn is_unique_violation(message: &str) -> bool {
    message.contains("already contains")
}

/// True when the engine rejected a commit that may simply be retried.
///
/// The embedded engine uses optimistic transactions: conflicting commits
/// fail instead of blocking.
pub(crate) fn is_write_conflict(message: &str) -> bool {
    message.contains("can be retried")
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
