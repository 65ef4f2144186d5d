//! Administrator Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Admin;

/// Repository for administrator accounts
#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Look up an administrator; usernames key the records directly
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Admin>> {
        let admin: Option<Admin> = self.base.db().select(("admin", username)).await?;
        Ok(admin)
    }

    /// Create or refresh an administrator with the given password hash.
    ///
    /// Re-provisioning an existing account keeps its original created_at.
    pub async fn upsert(&self, username: &str, password_hash: &str) -> RepoResult<Admin> {
        let mut result = self
            .base
            .db()
            .query(
                "UPSERT type::thing('admin', $username) \
                 SET username = $username, \
                     password_hash = $hash, \
                     created_at = (created_at ?? time::now()) \
                 RETURN AFTER",
            )
            .bind(("username", username.to_string()))
            .bind(("hash", password_hash.to_string()))
            .await?;

        let admin: Option<Admin> = result.take(0)?;
        admin.ok_or_else(|| RepoError::Database("Failed to upsert administrator".to_string()))
    }
}
