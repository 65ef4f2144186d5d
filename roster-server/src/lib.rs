//! Roster Server - employee management backend
//!
//! # Overview
//!
//! - **API** (`api`): RESTful HTTP endpoints
//! - **Auth** (`auth`): JWT + Argon2 authentication
//! - **Database** (`db`): embedded SurrealDB storage
//! - **Core** (`core`): configuration, state, HTTP server, S3 access
//!
//! # Module layout
//!
//! ```text
//! roster-server/src/
//! ├── api/           # HTTP routes and handlers
//! ├── auth/          # JWT authentication and middleware
//! ├── core/          # Config, state, server, S3
//! ├── db/            # Models and repositories
//! └── utils/         # Logging, validation, result types
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, S3Service, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____/ /____  _____
   / __ \/ __ \/ ___/ __/ _ \/ ___/
  / /_/ / /_/ (__  ) /_/  __/ /
 / _, _/\____/____/\__/\___/_/
/_/ |_|
    "#
    );
}
