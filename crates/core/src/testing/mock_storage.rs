//! In-memory history storage for testing.

use std::sync::Mutex;

use crate::history::{HistoryStorage, StorageError};

/// Mock implementation of the HistoryStorage trait.
///
/// Keeps the payload in memory and can be told to fail the next read or
/// write, which is the only way to exercise the store's storage-error paths.
#[derive(Debug, Default)]
pub struct MockHistoryStorage {
    payload: Mutex<Option<String>>,
    fail_next_read: Mutex<bool>,
    fail_next_write: Mutex<bool>,
}

impl MockHistoryStorage {
    /// Create an empty mock storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock storage pre-seeded with a raw payload.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Mutex::new(Some(payload.to_string())),
            ..Self::default()
        }
    }

    /// Inspect the stored payload.
    pub fn payload(&self) -> Option<String> {
        self.payload.lock().unwrap().clone()
    }

    /// Seed a raw payload directly, bypassing the store.
    pub fn set_payload(&self, payload: &str) {
        *self.payload.lock().unwrap() = Some(payload.to_string());
    }

    /// Fail the next read with an I/O error.
    pub fn fail_next_read(&self) {
        *self.fail_next_read.lock().unwrap() = true;
    }

    /// Fail the next write with an I/O error.
    pub fn fail_next_write(&self) {
        *self.fail_next_write.lock().unwrap() = true;
    }

    fn injected_error() -> StorageError {
        StorageError::Io(std::io::Error::other("injected failure"))
    }
}

impl HistoryStorage for MockHistoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if std::mem::take(&mut *self.fail_next_read.lock().unwrap()) {
            return Err(Self::injected_error());
        }
        Ok(self.payload.lock().unwrap().clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if std::mem::take(&mut *self.fail_next_write.lock().unwrap()) {
            return Err(Self::injected_error());
        }
        *self.payload.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.payload.lock().unwrap() = None;
        Ok(())
    }
}
