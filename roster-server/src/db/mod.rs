//! Database Module
//!
//! Handles the embedded SurrealDB instance and schema definition

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "roster";
const DATABASE: &str = "main";

/// Applied on every startup; IF NOT EXISTS keeps re-runs idempotent
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS admin SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS username ON admin TYPE string;
    DEFINE FIELD IF NOT EXISTS password_hash ON admin TYPE string;
    DEFINE FIELD IF NOT EXISTS created_at ON admin TYPE datetime;
    DEFINE INDEX IF NOT EXISTS admin_username ON admin FIELDS username UNIQUE;

    DEFINE TABLE IF NOT EXISTS employee SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS employee_id ON employee TYPE int;
    DEFINE FIELD IF NOT EXISTS name ON employee TYPE string;
    DEFINE FIELD IF NOT EXISTS email ON employee TYPE string;
    DEFINE FIELD IF NOT EXISTS mobile ON employee TYPE string;
    DEFINE FIELD IF NOT EXISTS designation ON employee TYPE string;
    DEFINE FIELD IF NOT EXISTS gender ON employee TYPE string;
    DEFINE FIELD IF NOT EXISTS course ON employee TYPE array<string>;
    DEFINE FIELD IF NOT EXISTS image ON employee TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS status ON employee TYPE string DEFAULT 'Active';
    DEFINE FIELD IF NOT EXISTS created_date ON employee TYPE datetime READONLY;
    DEFINE INDEX IF NOT EXISTS employee_email ON employee FIELDS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS employee_number ON employee FIELDS employee_id UNIQUE;

    DEFINE TABLE IF NOT EXISTS counter SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON counter TYPE string;
    DEFINE FIELD IF NOT EXISTS value ON counter TYPE int;
";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database under `data_dir` and apply the schema
    pub async fn new(data_dir: &str) -> Result<Self, AppError> {
        let db_path = Path::new(data_dir).join("roster.db");

        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established (embedded RocksDB)");

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}
