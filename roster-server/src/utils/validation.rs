//! Input validation helpers
//!
//! Centralized text length constants plus the field-violation collector used
//! by entity validation. A failed validation carries every offending field,
//! not just the first one.

use std::fmt;

use shared::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Short identifiers: course names etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Mobile numbers: exactly this many ASCII digits
pub const MOBILE_DIGITS: usize = 10;

// ── Field violations ────────────────────────────────────────────────

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Collected validation failures for one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert into an [`AppError`] carrying one detail entry per field.
    ///
    /// The top-level message is the first violation's message; every message
    /// already names its field.
    pub fn into_app_error(self) -> AppError {
        let message = self
            .violations
            .first()
            .map(|v| v.message.clone())
            .unwrap_or_else(|| ErrorCode::ValidationFailed.message().to_string());

        let mut err = AppError::with_message(ErrorCode::ValidationFailed, message);
        for violation in self.violations {
            err = err.with_detail(violation.field, violation.message);
        }
        err
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

// ── Shape checks ────────────────────────────────────────────────────

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not our problem.
pub fn is_valid_email(email: &str) -> bool {
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

/// Mobile numbers are exactly ten ASCII digits, nothing else.
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == MOBILE_DIGITS && mobile.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+tag@sub.example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa@mple.com"));
    }

    #[test]
    fn test_valid_mobile() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("12345"));
        assert!(!is_valid_mobile("98765432101"));
        assert!(!is_valid_mobile("987654321a"));
        assert!(!is_valid_mobile("98765 4321"));
    }

    #[test]
    fn test_into_app_error_carries_all_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        errors.push("mobile", "Mobile number must be exactly 10 digits");

        let err = errors.into_app_error();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Name is required");

        let details = err.details.expect("details present");
        assert_eq!(details.len(), 2);
        assert_eq!(
            details.get("mobile").and_then(|v| v.as_str()),
            Some("Mobile number must be exactly 10 digits")
        );
    }

    #[test]
    fn test_display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("gender", "Gender must be M or F");
        errors.push("course", "At least one course must be selected");
        assert_eq!(
            errors.to_string(),
            "Gender must be M or F; At least one course must be selected"
        );
    }
}
