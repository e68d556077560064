//! Watch-history record types.

use serde::{Deserialize, Serialize};

use super::sanitize;
use crate::media::MediaType;

/// One stored watch record. The store keeps at most one live record per
/// `(media_id, media_type)` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchEvent {
    /// Metadata service ID of the movie or show.
    pub media_id: u32,
    /// Whether this record tracks a movie or a show.
    pub media_type: MediaType,
    /// Display title, sanitized.
    pub title: String,
    /// Poster path, pattern-validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path, pattern-validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Epoch millis, set by the store at write time.
    pub timestamp: i64,
    /// Season being watched (shows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    /// Episode being watched (shows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    /// Episode name (shows only), sanitized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_name: Option<String>,
    /// Fraction of runtime watched, clamped to [0, 1].
    #[serde(default)]
    pub progress: f32,
    /// Whether playback ran to the end.
    #[serde(default)]
    pub completed: bool,
}

impl WatchEvent {
    /// The replace-on-write identity of this record.
    pub fn key(&self) -> (u32, MediaType) {
        (self.media_id, self.media_type)
    }

    /// Schema check applied to every element read back from storage.
    /// Records written by this store always pass; foreign or corrupt data
    /// that slipped into the backing storage is dropped by the reader.
    pub fn is_valid(&self) -> bool {
        self.media_id != 0
            && self.progress.is_finite()
            && (0.0..=1.0).contains(&self.progress)
            && self.title.chars().count() <= sanitize::MAX_TEXT_LEN
            && self
                .episode_name
                .as_ref()
                .is_none_or(|n| n.chars().count() <= sanitize::MAX_TEXT_LEN)
            && self
                .season_number
                .is_none_or(|s| s <= sanitize::MAX_SEASON_NUMBER)
            && self.episode_number.is_none_or(|e| {
                (sanitize::MIN_EPISODE_NUMBER..=sanitize::MAX_EPISODE_NUMBER).contains(&e)
            })
            && self
                .poster_path
                .as_deref()
                .is_none_or(sanitize::is_valid_image_path)
            && self
                .backdrop_path
                .as_deref()
                .is_none_or(sanitize::is_valid_image_path)
    }
}

/// Inbound playback report. The player sends one when playback ends or is
/// interrupted; `completed` is true only for the former.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordWatch {
    pub media_id: u32,
    pub media_type: MediaType,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub episode_name: Option<String>,
    #[serde(default)]
    pub progress: f32,
    #[serde(default)]
    pub completed: bool,
}

impl RecordWatch {
    /// Sanitize into a storable event. `None` means the request failed hard
    /// validation and must be ignored; the store emits the diagnostic.
    pub fn into_event(self, timestamp_ms: i64) -> Option<WatchEvent> {
        if self.media_id == 0 {
            return None;
        }
        Some(WatchEvent {
            media_id: self.media_id,
            media_type: self.media_type,
            title: sanitize::clean_text(&self.title),
            poster_path: self
                .poster_path
                .as_deref()
                .and_then(sanitize::clean_image_path),
            backdrop_path: self
                .backdrop_path
                .as_deref()
                .and_then(sanitize::clean_image_path),
            timestamp: timestamp_ms,
            season_number: self.season_number.map(sanitize::clamp_season),
            episode_number: self.episode_number.map(sanitize::clamp_episode),
            episode_name: self.episode_name.as_deref().map(sanitize::clean_text),
            progress: sanitize::clamp_progress(self.progress),
            completed: self.completed,
        })
    }
}
