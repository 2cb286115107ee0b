//! In-memory store implementation
//!
//! Used by unit tests and demo seeding. Same commit semantics as the file
//! store: a failed closure leaves the state untouched.

use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::ports::{Store, StoreData};

/// Volatile store holding the document in memory
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn snapshot(&self) -> Result<StoreData> {
        let state = self
            .state
            .lock()
            .map_err(|_| Error::storage("store mutex poisoned"))?;
        Ok(state.clone())
    }

    fn commit(&self, mutate: &mut dyn FnMut(&mut StoreData) -> Result<()>) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| Error::storage("store mutex poisoned"))?;
        let mut working = state.clone();
        mutate(&mut working)?;
        *state = working;
        Ok(())
    }
}
