//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod admin;
pub mod counter;
pub mod employee;

// Re-exports
pub use admin::{Admin, AdminId};
pub use counter::{Counter, CounterId};
pub use employee::{Employee, EmployeeCreate, EmployeeId, validate_employee_input};
