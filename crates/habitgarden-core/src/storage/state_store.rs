//! Whole-state persistence.
//!
//! The entire application state is one JSON document under a single
//! file, overwritten wholesale on every change. There is no versioning
//! field and no migration logic: the stored shape IS the in-memory
//! shape. An absent record means "first run"; a corrupt record is
//! surfaced as [`StorageError::Corrupt`] and handled by the caller.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, StorageError};
use crate::state::AppState;

/// File name of the state document inside the data directory.
pub const STATE_FILE: &str = "state.json";

/// Persistence collaborator for the whole application state.
pub trait StateStore {
    /// Load the persisted state. `Ok(None)` means no record exists.
    fn load(&self) -> Result<Option<AppState>>;

    /// Persist the full state, replacing any previous record.
    fn save(&self, state: &AppState) -> Result<()>;
}

/// On-disk JSON store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `<data_dir>/state.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: super::data_dir()?.join(STATE_FILE),
        })
    }

    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move a corrupt record aside so a fresh state can be written.
    /// Returns the backup path.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails.
    pub fn quarantine(&self) -> Result<PathBuf> {
        let backup = self.path.with_extension("json.corrupt");
        std::fs::rename(&self.path, &backup).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(backup)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<AppState>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        let state = serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(state))
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

/// In-memory store, a fake persistence collaborator for tests and
/// embedding without a storage backend.
#[derive(Default)]
pub struct MemoryStore {
    record: Mutex<Option<AppState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved state, if any.
    pub fn snapshot(&self) -> Option<AppState> {
        self.record.lock().expect("store poisoned").clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<AppState>> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &AppState) -> Result<()> {
        *self.record.lock().expect("store poisoned") = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::habit::default_habits;

    #[test]
    fn missing_record_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(STATE_FILE));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(STATE_FILE));
        let state = AppState::default()
            .toggled("e1", "2026-01-07")
            .completed_setup(default_habits())
            .unwrap();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn corrupt_record_is_reported_not_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        match store.load() {
            Err(CoreError::Storage(StorageError::Corrupt { .. })) => {}
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }

    #[test]
    fn quarantine_moves_record_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE);
        std::fs::write(&path, "garbage").unwrap();
        let store = JsonFileStore::new(&path);
        let backup = store.quarantine().unwrap();
        assert!(!path.exists());
        assert!(backup.exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_roundtrips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        let state = AppState::default().toggled("b2", "2025-12-31");
        store.save(&state).unwrap();
        assert_eq!(store.snapshot(), Some(state));
    }
}
