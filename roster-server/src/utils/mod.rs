//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from `shared::error`)
//! - [`validation`] - field-level input validation
//! - [`logger`] - tracing setup

pub mod logger;
pub mod result;
pub mod validation;

// Re-export error types from shared so handlers import from one place
pub use result::AppResult;
pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
