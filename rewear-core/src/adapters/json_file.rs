//! JSON file store implementation
//!
//! The whole marketplace document lives in a single JSON file. Writes go
//! through a temp file in the same directory followed by an atomic rename,
//! so the file on disk is always a complete document. An exclusive lock on
//! a sibling `.lock` file serializes access across processes; the state is
//! re-read from disk under that lock before every mutation, so two CLI
//! invocations racing on the same file cannot lose each other's updates.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::ports::{Store, StoreData};

/// File-backed store holding the marketplace document
pub struct JsonFileStore {
    data_path: PathBuf,
    lock_path: PathBuf,
    // Serializes threads within this process; the file lock handles
    // other processes
    guard: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store backed by `data_path`. The file is created lazily on
    /// the first commit; a missing file reads as empty collections.
    pub fn open(data_path: &Path) -> Result<Self> {
        if let Some(parent) = data_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut lock_name = data_path
            .file_name()
            .ok_or_else(|| Error::storage("store path has no file name"))?
            .to_os_string();
        lock_name.push(".lock");
        let lock_path = data_path.with_file_name(lock_name);

        let store = Self {
            data_path: data_path.to_path_buf(),
            lock_path,
            guard: Mutex::new(()),
        };

        // Fail fast on a corrupt file rather than on the first operation
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.data_path
    }

    /// Acquire the cross-process lock file
    fn lock_file(&self) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.lock_path)?;
        Ok(file)
    }

    /// Read the current document from disk
    ///
    /// Missing file defaults to empty collections. A malformed file is a
    /// hard error: silently resetting it would overwrite the damaged data
    /// with an empty document on the next commit.
    fn load(&self) -> Result<StoreData> {
        if !self.data_path.exists() {
            return Ok(StoreData::default());
        }
        let content = std::fs::read_to_string(&self.data_path)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::storage(format!(
                "corrupt store file {}: {}",
                self.data_path.display(),
                e
            ))
        })
    }

    /// Write the document to a temp file and atomically rename it into place
    fn persist(&self, data: &StoreData) -> Result<()> {
        let dir = self
            .data_path
            .parent()
            .ok_or_else(|| Error::storage("store path has no parent directory"))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, data)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.data_path)
            .map_err(|e| Error::storage(format!("failed to replace store file: {}", e)))?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn snapshot(&self) -> Result<StoreData> {
        let _guard = self
            .guard
            .lock()
            .map_err(|_| Error::storage("store mutex poisoned"))?;
        let lock = self.lock_file()?;
        lock.lock_shared()
            .map_err(|e| Error::storage(format!("failed to lock store: {}", e)))?;
        let data = self.load();
        let _ = lock.unlock();
        data
    }

    fn commit(&self, mutate: &mut dyn FnMut(&mut StoreData) -> Result<()>) -> Result<()> {
        let _guard = self
            .guard
            .lock()
            .map_err(|_| Error::storage("store mutex poisoned"))?;
        let lock = self.lock_file()?;
        lock.lock_exclusive()
            .map_err(|e| Error::storage(format!("failed to lock store: {}", e)))?;

        // Re-read under the lock so concurrent processes serialize instead
        // of clobbering each other
        let result = self.load().and_then(|mut working| {
            mutate(&mut working)?;
            self.persist(&working)
        });

        let _ = lock.unlock();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(&dir.path().join("rewear.json")).unwrap()
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let data = store.snapshot().unwrap();
        assert!(data.users.is_empty());
        assert!(data.session.is_none());
    }

    #[test]
    fn test_commit_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rewear.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store
                .commit(&mut |data| {
                    data.users
                        .push(User::new("Jane", "jane@example.com", "secret1", 100, false));
                    Ok(())
                })
                .unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        let data = reopened.snapshot().unwrap();
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.users[0].email, "jane@example.com");
    }

    #[test]
    fn test_failed_commit_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store
            .commit(&mut |data| {
                data.users
                    .push(User::new("Jane", "jane@example.com", "secret1", 100, false));
                Ok(())
            })
            .unwrap();

        let err = store.commit(&mut |data| {
            data.users.clear();
            Err(Error::validation("abort"))
        });
        assert!(err.is_err());

        // The earlier state is still intact
        assert_eq!(store.snapshot().unwrap().users.len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rewear.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::open(&path);
        assert!(matches!(err, Err(Error::Storage(_))));
    }

    #[test]
    fn test_commits_from_two_instances_both_land() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rewear.json");
        let a = JsonFileStore::open(&path).unwrap();
        let b = JsonFileStore::open(&path).unwrap();

        a.commit(&mut |data| {
            data.users
                .push(User::new("A", "a@example.com", "secret1", 100, false));
            Ok(())
        })
        .unwrap();
        b.commit(&mut |data| {
            data.users
                .push(User::new("B", "b@example.com", "secret1", 100, false));
            Ok(())
        })
        .unwrap();

        assert_eq!(a.snapshot().unwrap().users.len(), 2);
    }
}
