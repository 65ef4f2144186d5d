//! Roster Client - HTTP client for the roster server
//!
//! Network calls to the roster REST API, plus the pieces a table UI needs:
//! session persistence, list search/sort/pagination, and form validation.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod session;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{public_object_url, HttpClient};
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{
    ApiResponse, EmployeeInput, EmployeeResponse, LoginResponse, UploadUrlResponse,
    VerifyTokenResponse,
};
pub use shared::models::employee::{Designation, EmployeeStatus, Gender};
