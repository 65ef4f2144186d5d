use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, S3Service};
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - shared references to every service
///
/// Cloning is shallow; handlers receive it through `State<ServerState>`.
///
/// # Components
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | jwt_service | Arc<JwtService> | JWT token service |
/// | s3 | S3Service | Pre-signed upload URLs |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT token service (shared ownership)
    pub jwt_service: Arc<JwtService>,
    /// Object storage service
    pub s3: S3Service,
}

impl ServerState {
    /// Create server state from already-initialized services.
    ///
    /// Usually [`ServerState::initialize`] is what you want.
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        s3: S3Service,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            s3,
        }
    }

    /// Initialize the server state.
    ///
    /// In order:
    /// 1. Data directory (created if missing)
    /// 2. Database (data_dir/roster.db) and its schema
    /// 3. JWT and S3 services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data directory: {e}")))?;

        let db_service = DbService::new(&config.data_dir).await?;
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let s3 = S3Service::new(config).await;

        Ok(Self::new(config.clone(), db, jwt_service, s3))
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
