//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Item is not available: {0}")]
    ItemUnavailable(String),

    #[error("Not enough points: need {required}, have {available}")]
    InsufficientPoints { required: i64, available: i64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_points_message() {
        let err = Error::InsufficientPoints {
            required: 120,
            available: 80,
        };
        assert_eq!(err.to_string(), "Not enough points: need 120, have 80");
    }

    #[test]
    fn test_credentials_error_is_uniform() {
        // Unknown email and wrong password must be indistinguishable
        assert_eq!(
            Error::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
