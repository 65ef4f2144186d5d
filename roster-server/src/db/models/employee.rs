//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::client::{EmployeeInput, EmployeeResponse};
use shared::models::employee::{Designation, EmployeeStatus, Gender};

use super::serde_helpers;
use crate::utils::validation::{
    self, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, ValidationErrors,
};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee model matching the employee table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    /// Display number allocated by the counter, unique
    pub employee_id: i64,
    pub name: String,
    /// Stored lowercase, unique
    pub email: String,
    pub mobile: String,
    pub designation: Designation,
    pub gender: Gender,
    #[serde(default)]
    pub course: Vec<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub created_date: DateTime<Utc>,
}

/// Validated create/update payload
///
/// Carries no employee_id or created_date: the display number comes from the
/// allocator and the creation instant from the storage engine, so an update
/// cannot touch either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: Designation,
    pub gender: Gender,
    pub course: Vec<String>,
    pub image: Option<String>,
}

/// Validate an incoming payload and normalize it into a draft.
///
/// Collects every field violation in one pass. The email is lowercased here
/// so all later comparisons and storage see one canonical form.
pub fn validate_employee_input(input: &EmployeeInput) -> Result<EmployeeCreate, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = input.name.trim().to_string();
    if name.is_empty() {
        errors.push("name", "Name is required");
    } else if name.len() > MAX_NAME_LEN {
        errors.push(
            "name",
            format!("Name must be at most {MAX_NAME_LEN} characters"),
        );
    }

    let email = input.email.trim().to_lowercase();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if email.len() > MAX_EMAIL_LEN {
        errors.push(
            "email",
            format!("Email must be at most {MAX_EMAIL_LEN} characters"),
        );
    } else if !validation::is_valid_email(&email) {
        errors.push("email", "Email format is invalid");
    }

    let mobile = input.mobile.trim().to_string();
    if !validation::is_valid_mobile(&mobile) {
        errors.push("mobile", "Mobile number must be exactly 10 digits");
    }

    let designation = Designation::parse(input.designation.trim());
    if designation.is_none() {
        errors.push("designation", "Designation must be one of HR, Manager, Sales");
    }

    let gender = Gender::parse(input.gender.trim());
    if gender.is_none() {
        errors.push("gender", "Gender must be M or F");
    }

    let course: Vec<String> = input.course.iter().map(|c| c.trim().to_string()).collect();
    if course.is_empty() {
        errors.push("course", "At least one course must be selected");
    } else if course.iter().any(|c| c.is_empty()) {
        errors.push("course", "Course entries must not be empty");
    } else if course.iter().any(|c| c.len() > MAX_SHORT_TEXT_LEN) {
        errors.push(
            "course",
            format!("Course entries must be at most {MAX_SHORT_TEXT_LEN} characters"),
        );
    }

    let image = input
        .image
        .as_ref()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty());
    if let Some(url) = &image
        && url.len() > MAX_URL_LEN
    {
        errors.push(
            "image",
            format!("Image URL must be at most {MAX_URL_LEN} characters"),
        );
    }

    match (designation, gender) {
        (Some(designation), Some(gender)) if errors.is_empty() => Ok(EmployeeCreate {
            name,
            email,
            mobile,
            designation,
            gender,
            course,
            image,
        }),
        _ => Err(errors),
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id.map(|t| t.to_string()).unwrap_or_default(),
            employee_id: e.employee_id,
            name: e.name,
            email: e.email,
            mobile: e.mobile,
            designation: e.designation,
            gender: e.gender,
            course: e.course,
            image: e.image,
            status: e.status,
            created_date: e.created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> EmployeeInput {
        EmployeeInput {
            name: "Jane Doe".to_string(),
            email: "Jane@Example.COM".to_string(),
            mobile: "9876543210".to_string(),
            designation: "HR".to_string(),
            gender: "F".to_string(),
            course: vec!["MCA".to_string()],
            image: None,
        }
    }

    #[test]
    fn test_valid_input_is_normalized() {
        let draft = validate_employee_input(&valid_input()).unwrap();
        assert_eq!(draft.email, "jane@example.com");
        assert_eq!(draft.designation, Designation::Hr);
        assert_eq!(draft.gender, Gender::F);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut input = valid_input();
        input.name = "  Jane Doe  ".to_string();
        input.email = " jane@example.com ".to_string();
        input.course = vec![" MCA ".to_string()];

        let draft = validate_employee_input(&input).unwrap();
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.email, "jane@example.com");
        assert_eq!(draft.course, vec!["MCA".to_string()]);
    }

    #[test]
    fn test_short_mobile_names_the_field() {
        let mut input = valid_input();
        input.mobile = "12345".to_string();

        let errors = validate_employee_input(&input).unwrap_err();
        assert_eq!(errors.violations.len(), 1);
        assert_eq!(errors.violations[0].field, "mobile");
        assert!(errors.violations[0].message.contains("10 digits"));
    }

    #[test]
    fn test_all_violations_are_collected() {
        let input = EmployeeInput {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            mobile: "abc".to_string(),
            designation: "CEO".to_string(),
            gender: "X".to_string(),
            course: vec![],
            image: None,
        };

        let errors = validate_employee_input(&input).unwrap_err();
        let fields: Vec<&str> = errors.violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["name", "email", "mobile", "designation", "gender", "course"]
        );
    }

    #[test]
    fn test_designation_is_case_sensitive() {
        let mut input = valid_input();
        input.designation = "hr".to_string();
        assert!(validate_employee_input(&input).is_err());
    }

    #[test]
    fn test_blank_image_becomes_none() {
        let mut input = valid_input();
        input.image = Some("   ".to_string());
        let draft = validate_employee_input(&input).unwrap();
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_response_conversion_stringifies_id() {
        let employee = Employee {
            id: Some(RecordId::from_table_key("employee", "abc")),
            employee_id: 3,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "9876543210".to_string(),
            designation: Designation::Sales,
            gender: Gender::F,
            course: vec!["BCA".to_string()],
            image: None,
            status: EmployeeStatus::Active,
            created_date: Utc::now(),
        };

        let response = EmployeeResponse::from(employee);
        assert_eq!(response.id, "employee:abc");
        assert_eq!(response.employee_id, 3);
    }
}
