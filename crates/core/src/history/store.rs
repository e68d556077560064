//! The watch-history store.
//!
//! Replace-on-key writes with a most-recent-first cap. The public contract
//! is infallible: invalid requests, storage failures, and corrupt payloads
//! all degrade to ignore-or-empty with a logged diagnostic, never an error
//! surfaced to the caller.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, warn};

use super::storage::HistoryStorage;
use super::types::{RecordWatch, WatchEvent};
use crate::media::MediaType;
use crate::metrics;

pub struct HistoryStore {
    storage: Arc<dyn HistoryStorage>,
    max_entries: usize,
    // Serializes read-modify-write cycles; plain reads go straight through.
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn HistoryStorage>, max_entries: usize) -> Self {
        Self {
            storage,
            max_entries,
            write_lock: Mutex::new(()),
        }
    }

    /// Record a playback report. Replaces any existing record with the same
    /// `(media_id, media_type)` key and moves it to most-recent.
    pub fn record(&self, request: RecordWatch) {
        let media_id = request.media_id;
        let media_type = request.media_type;

        let Some(event) = request.into_event(Utc::now().timestamp_millis()) else {
            warn!(media_id, %media_type, "ignoring watch event that failed validation");
            metrics::HISTORY_EVENTS_DROPPED
                .with_label_values(&["invalid_media_id"])
                .inc();
            return;
        };

        let _guard = self.write_lock.lock().unwrap();
        let mut entries = self.load();
        entries.retain(|e| e.key() != event.key());
        entries.insert(0, event);
        entries.truncate(self.max_entries);
        self.persist(&entries);

        debug!(media_id, %media_type, total = entries.len(), "recorded watch event");
        metrics::HISTORY_EVENTS_RECORDED.inc();
    }

    /// All records, most recent first. A missing, corrupt, or foreign
    /// payload yields an empty list.
    pub fn list(&self) -> Vec<WatchEvent> {
        self.load()
    }

    /// Remove the record for a key, if present.
    pub fn remove(&self, media_id: u32, media_type: MediaType) {
        let _guard = self.write_lock.lock().unwrap();
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| e.key() != (media_id, media_type));
        if entries.len() != before {
            self.persist(&entries);
            debug!(media_id, %media_type, "removed watch event");
        }
    }

    /// Drop all records.
    pub fn clear(&self) {
        let _guard = self.write_lock.lock().unwrap();
        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "failed to clear history storage");
        }
    }

    /// Most recent progress for a key, or 0.0 when absent.
    pub fn progress_for(&self, media_id: u32, media_type: MediaType) -> f32 {
        self.load()
            .iter()
            .find(|e| e.key() == (media_id, media_type))
            .map(|e| e.progress)
            .unwrap_or(0.0)
    }

    fn load(&self) -> Vec<WatchEvent> {
        let payload = match self.storage.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read history storage");
                return Vec::new();
            }
        };

        let raw: Vec<serde_json::Value> = match serde_json::from_str(&payload) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "history payload is not a JSON list, treating as empty");
                return Vec::new();
            }
        };

        let total = raw.len();
        let entries: Vec<WatchEvent> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value::<WatchEvent>(value).ok())
            .filter(|e| e.is_valid())
            .collect();

        let dropped = total - entries.len();
        if dropped > 0 {
            warn!(dropped, "dropped history entries that failed schema validation");
            metrics::HISTORY_EVENTS_DROPPED
                .with_label_values(&["schema"])
                .inc_by(dropped as u64);
        }
        entries
    }

    fn persist(&self, entries: &[WatchEvent]) {
        match serde_json::to_string(entries) {
            Ok(payload) => {
                if let Err(e) = self.storage.write(&payload) {
                    warn!(error = %e, "failed to write history storage");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize history"),
        }
    }
}
