//! Administrator Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Administrator ID type
pub type AdminId = RecordId;

/// Administrator account matching the admin table
///
/// Records are keyed by username (`admin:<username>`), provisioned only by
/// the seed binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AdminId>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Verify a candidate password against the stored argon2 hash.
    ///
    /// A hash that fails to parse counts as a mismatch; callers cannot tell
    /// the two apart.
    pub fn verify_password(&self, password: &str) -> bool {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Hash a password using argon2 with a fresh random salt
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::password_hash::SaltString;
        use argon2::password_hash::rand_core::OsRng;
        use argon2::{Argon2, PasswordHasher};
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_with_password(password: &str) -> Admin {
        Admin {
            id: None,
            username: "admin".to_string(),
            password_hash: Admin::hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_verify_roundtrip() {
        let admin = admin_with_password("secret123");
        assert!(admin.verify_password("secret123"));
        assert!(!admin.verify_password("secret124"));
        assert!(!admin.verify_password(""));
    }

    #[test]
    fn test_unparseable_hash_is_a_mismatch() {
        let admin = Admin {
            id: None,
            username: "admin".to_string(),
            password_hash: "not-a-hash".to_string(),
            created_at: Utc::now(),
        };
        assert!(!admin.verify_password("anything"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = Admin::hash_password("secret123").unwrap();
        let b = Admin::hash_password("secret123").unwrap();
        assert_ne!(a, b);
    }
}
