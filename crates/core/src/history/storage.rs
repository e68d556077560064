//! Pluggable persistence for the serialized history list.
//!
//! The whole history is one serialized JSON list under a single logical key.
//! Backends move raw strings; parsing and validation stay in the store so a
//! corrupt or foreign payload can never fail a read.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backing storage for the single serialized history list.
pub trait HistoryStorage: Send + Sync {
    /// Read the raw serialized list. `None` means nothing stored yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored list.
    fn write(&self, payload: &str) -> Result<(), StorageError>;

    /// Remove the stored list entirely.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed storage. Writes go through a sibling temp file and a rename
/// so a crashed write leaves the previous payload intact.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl HistoryStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp = self.temp_path();
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), bytes = payload.len(), "wrote history file");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
