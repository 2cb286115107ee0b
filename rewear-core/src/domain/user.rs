//! User domain model

use chrono::{DateTime, Utc};
use rand::RngCore;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::id::generate_id;

/// A registered member of the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored lowercase; the unique key among users
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    /// Virtual currency balance, never negative
    pub points: i64,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly salted password hash
    pub fn new(
        name: impl Into<String>,
        email: &str,
        password: &str,
        starting_points: i64,
        is_admin: bool,
    ) -> Self {
        let salt = generate_salt();
        let hash = hash_password(&salt, password);
        Self {
            id: generate_id(),
            name: name.into(),
            email: Self::normalize_email(email),
            password_salt: salt,
            password_hash: hash,
            points: starting_points,
            is_admin,
            created_at: Utc::now(),
        }
    }

    /// Normalize an email address for lookup: trimmed, lowercase
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Loose shape check: local part, one '@', dotted domain
    pub fn is_valid_email(email: &str) -> bool {
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        re.is_match(email.trim())
    }

    /// Check a candidate password against the stored salted hash
    pub fn verify_password(&self, password: &str) -> bool {
        hash_password(&self.password_salt, password) == self.password_hash
    }

    /// Validate user data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name cannot be empty");
        }
        if !Self::is_valid_email(&self.email) {
            return Err("email address is not valid");
        }
        if self.points < 0 {
            return Err("points balance cannot be negative");
        }
        Ok(())
    }
}

/// Generate a random hex salt
fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(&bytes)
}

/// SHA256 of salt|password, hex encoded
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b"|");
    hasher.update(password.as_bytes());
    hex::encode(&hasher.finalize())
}

mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_verification() {
        let user = User::new("Test", "test@example.com", "hunter22", 100, false);
        assert!(user.verify_password("hunter22"));
        assert!(!user.verify_password("hunter23"));
        // Plaintext never stored
        assert_ne!(user.password_hash, "hunter22");
    }

    #[test]
    fn test_salts_differ_between_users() {
        let a = User::new("A", "a@example.com", "same-password", 100, false);
        let b = User::new("B", "b@example.com", "same-password", 100, false);
        assert_ne!(a.password_salt, b.password_salt);
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[test]
    fn test_email_normalization() {
        assert_eq!(User::normalize_email(" Jane@Example.COM "), "jane@example.com");
    }

    #[test]
    fn test_email_validation() {
        assert!(User::is_valid_email("jane@example.com"));
        assert!(!User::is_valid_email("jane@example"));
        assert!(!User::is_valid_email("not-an-email"));
        assert!(!User::is_valid_email("two@at@example.com"));
    }

    #[test]
    fn test_user_validation() {
        let mut user = User::new("Jane", "jane@example.com", "secret1", 100, false);
        assert!(user.validate().is_ok());

        user.name = "  ".to_string();
        assert!(user.validate().is_err());
    }
}
