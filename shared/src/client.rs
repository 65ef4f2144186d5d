//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.
//! These types are shared between roster-server and roster-client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::employee::{Designation, EmployeeStatus, Gender};

// Re-export ApiResponse from error module
pub use crate::error::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Token verification response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub username: String,
}

// =============================================================================
// Employee API DTOs
// =============================================================================

/// Employee create/update payload
///
/// Enum-like fields arrive as plain strings so that invalid values surface
/// as field-level validation errors instead of deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: String,
    pub gender: String,
    pub course: Vec<String>,
    pub image: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Employee as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Record ID in "table:id" form
    pub id: String,
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: Designation,
    pub gender: Gender,
    pub course: Vec<String>,
    pub image: Option<String>,
    pub status: EmployeeStatus,
    pub created_date: DateTime<Utc>,
}

// =============================================================================
// Upload API DTOs
// =============================================================================

/// Pre-signed upload URL request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadUrlRequest {
    pub filename: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Pre-signed upload URL response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadUrlResponse {
    pub url: String,
    pub key: String,
}

// =============================================================================
// Health API DTOs
// =============================================================================

/// Health check response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_response_uses_camel_case() {
        let response = EmployeeResponse {
            id: "employee:abc123".to_string(),
            employee_id: 7,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "9876543210".to_string(),
            designation: Designation::Manager,
            gender: Gender::F,
            course: vec!["MCA".to_string()],
            image: None,
            status: EmployeeStatus::Active,
            created_date: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["employeeId"], 7);
        assert!(json["createdDate"].is_string());
        assert_eq!(json["designation"], "Manager");
        assert_eq!(json["gender"], "F");
        assert_eq!(json["status"], "Active");
        assert!(json.get("employee_id").is_none());
    }

    #[test]
    fn test_employee_input_defaults_missing_fields() {
        let input: EmployeeInput = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(input.name, "Jane");
        assert_eq!(input.email, "");
        assert!(input.course.is_empty());
        assert!(input.image.is_none());
    }

    #[test]
    fn test_upload_request_uses_type_key() {
        let request: UploadUrlRequest =
            serde_json::from_str(r#"{"filename": "photo.png", "type": "image/png"}"#).unwrap();
        assert_eq!(request.content_type, "image/png");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "image/png");
    }

    #[test]
    fn test_status_update_defaults_to_empty() {
        let request: StatusUpdateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.status, "");
    }
}
