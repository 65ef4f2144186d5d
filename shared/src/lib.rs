//! Shared types for the Roster platform
//!
//! Common types used by both the server and the client crate: the unified
//! error system, API request/response DTOs, and the employee domain enums.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::employee::{Designation, EmployeeStatus, Gender};
