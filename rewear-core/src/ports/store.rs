//! Store port - persistence abstraction
//!
//! The whole marketplace state is one document (`StoreData`). Adapters
//! provide a consistent snapshot for reads and an atomic closure-based
//! commit for writes: the closure mutates a working copy, and only a
//! successful closure followed by a successful persist becomes visible.
//! A failed commit leaves both memory and disk untouched.

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::{Item, Session, Swap, User};

/// The persisted marketplace document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub swaps: Vec<Swap>,
    /// The active login session, if any
    #[serde(default)]
    pub session: Option<Session>,
}

impl StoreData {
    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Case-insensitive email lookup (emails are stored lowercase)
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = User::normalize_email(email);
        self.users.iter().find(|u| u.email == email)
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_by_id_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}

/// Persistence abstraction over the marketplace document
///
/// Implementations must make `commit` atomic: concurrent committers
/// serialize, and a commit that errors (in the closure or while persisting)
/// must not change observable state.
pub trait Store: Send + Sync {
    /// A consistent copy of the current state
    fn snapshot(&self) -> Result<StoreData>;

    /// Apply a mutation atomically
    fn commit(&self, mutate: &mut dyn FnMut(&mut StoreData) -> Result<()>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_lookup_is_case_insensitive() {
        let mut data = StoreData::default();
        data.users
            .push(User::new("Jane", "jane@example.com", "secret1", 100, false));

        assert!(data.user_by_email("JANE@Example.com").is_some());
        assert!(data.user_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn test_empty_document_deserializes_with_defaults() {
        let data: StoreData = serde_json::from_str("{}").unwrap();
        assert!(data.users.is_empty());
        assert!(data.items.is_empty());
        assert!(data.swaps.is_empty());
        assert!(data.session.is_none());
    }
}
