//! Counter Repository
//!
//! Named monotonic counters backed by single-statement upserts.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, is_write_conflict};
use crate::db::models::Counter;

/// Counter that allocates employee display numbers
pub const EMPLOYEE_NUMBER_COUNTER: &str = "employeeId";

/// Attempts before giving up on a contended increment
const INCREMENT_RETRY_LIMIT: usize = 8;

/// Repository for named atomic counters
#[derive(Clone)]
pub struct CounterRepository {
    base: BaseRepository,
}

impl CounterRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Increment the named counter and return the new value.
    ///
    /// The increment-and-read is one UPSERT statement, so each committed
    /// call observes a distinct value; the record is created on first use.
    /// Conflicting commits are retried until one lands.
    pub async fn next(&self, name: &str) -> RepoResult<i64> {
        for _ in 0..INCREMENT_RETRY_LIMIT {
            match self.increment(name).await {
                Err(RepoError::Database(message)) if is_write_conflict(&message) => {
                    tokio::task::yield_now().await;
                }
                other => return other,
            }
        }

        Err(RepoError::Database(format!(
            "Counter '{name}' increment kept conflicting"
        )))
    }

    async fn increment(&self, name: &str) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query(
                "UPSERT type::thing('counter', $name) \
                 SET value = (value ?? 0) + 1, name = $name \
                 RETURN AFTER",
            )
            .bind(("name", name.to_string()))
            .await?;

        let counter: Option<Counter> = result.take(0)?;
        counter
            .map(|c| c.value)
            .ok_or_else(|| RepoError::Database(format!("Counter '{name}' returned no record")))
    }

    /// Current value without incrementing; 0 when the counter does not exist yet
    pub async fn current(&self, name: &str) -> RepoResult<i64> {
        let counter: Option<Counter> = self.base.db().select(("counter", name)).await?;
        Ok(counter.map(|c| c.value).unwrap_or(0))
    }
}
