//! Session domain model
//!
//! At most one session is persisted at a time (the store is a single-user
//! device store). The token is base64 over a small JSON payload - an opaque
//! handle, not a cryptographic credential.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// The payload encoded into a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenPayload {
    user_id: String,
    issued_at: DateTime<Utc>,
    nonce: u64,
}

/// An active login session referencing a user by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Issue a fresh session for the given user
    pub fn issue(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let issued_at = Utc::now();
        let payload = TokenPayload {
            user_id: user_id.clone(),
            issued_at,
            nonce: rand::thread_rng().next_u64(),
        };
        // Payload is a plain struct; serialization cannot fail
        let token = BASE64.encode(serde_json::to_vec(&payload).unwrap());
        Self {
            token,
            user_id,
            issued_at,
        }
    }

    /// Decode a token back into the user id it was issued for
    pub fn user_id_from_token(token: &str) -> Result<String> {
        let bytes = BASE64
            .decode(token)
            .map_err(|_| Error::storage("malformed session token"))?;
        let payload: TokenPayload = serde_json::from_slice(&bytes)
            .map_err(|_| Error::storage("malformed session token"))?;
        Ok(payload.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let session = Session::issue("user-42");
        assert_eq!(
            Session::user_id_from_token(&session.token).unwrap(),
            "user-42"
        );
    }

    #[test]
    fn test_tokens_are_unique_per_login() {
        let a = Session::issue("user-42");
        let b = Session::issue("user-42");
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(Session::user_id_from_token("not base64!").is_err());
        let garbage = BASE64.encode(b"{\"no\": \"user\"}");
        assert!(Session::user_id_from_token(&garbage).is_err());
    }
}
