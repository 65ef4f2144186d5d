//! Form-side validation for the employee editor.
//!
//! Mirrors the server's field rules and message wording. The photo gate
//! bounds files to JPG/PNG and 2 MB before an upload target is requested.

use shared::client::EmployeeInput;
use shared::models::employee::{Designation, Gender};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SHORT_TEXT_LEN: usize = 100;
pub const MAX_URL_LEN: usize = 2048;

/// Largest photo accepted by the form
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A single field violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check an employee form before submission. Empty result means the input
/// passes every rule the server will apply.
pub fn validate_form(input: &EmployeeInput) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    let name = input.name.trim();
    if name.is_empty() {
        issues.push(FieldIssue::new("name", "Name is required"));
    } else if name.len() > MAX_NAME_LEN {
        issues.push(FieldIssue::new(
            "name",
            format!("Name must be at most {MAX_NAME_LEN} characters"),
        ));
    }

    let email = input.email.trim().to_lowercase();
    if email.is_empty() {
        issues.push(FieldIssue::new("email", "Email is required"));
    } else if email.len() > MAX_EMAIL_LEN {
        issues.push(FieldIssue::new(
            "email",
            format!("Email must be at most {MAX_EMAIL_LEN} characters"),
        ));
    } else if !is_valid_email(&email) {
        issues.push(FieldIssue::new("email", "Email format is invalid"));
    }

    if !is_valid_mobile(input.mobile.trim()) {
        issues.push(FieldIssue::new(
            "mobile",
            "Mobile number must be exactly 10 digits",
        ));
    }

    if Designation::parse(input.designation.trim()).is_none() {
        issues.push(FieldIssue::new(
            "designation",
            "Designation must be one of HR, Manager, Sales",
        ));
    }

    if Gender::parse(input.gender.trim()).is_none() {
        issues.push(FieldIssue::new("gender", "Gender must be M or F"));
    }

    if input.course.is_empty() {
        issues.push(FieldIssue::new(
            "course",
            "At least one course must be selected",
        ));
    } else if input.course.iter().any(|c| c.trim().is_empty()) {
        issues.push(FieldIssue::new("course", "Course entries must not be empty"));
    } else if input.course.iter().any(|c| c.trim().len() > MAX_SHORT_TEXT_LEN) {
        issues.push(FieldIssue::new(
            "course",
            format!("Course entries must be at most {MAX_SHORT_TEXT_LEN} characters"),
        ));
    }

    if let Some(url) = input.image.as_deref().map(str::trim)
        && url.len() > MAX_URL_LEN
    {
        issues.push(FieldIssue::new(
            "image",
            format!("Image URL must be at most {MAX_URL_LEN} characters"),
        ));
    }

    issues
}

/// Gate a chosen photo on type and size before any request goes out
pub fn validate_photo(filename: &str, size_bytes: u64) -> Result<(), String> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if !PHOTO_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Photo must be a JPG or PNG file".to_string());
    }

    if size_bytes > MAX_PHOTO_BYTES {
        return Err("Photo must be 2 MB or smaller".to_string());
    }

    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}
