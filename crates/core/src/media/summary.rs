//! Mixed-media list entries.
//!
//! Listings mix full catalog records with history rows that only carry what
//! the store kept. `MediaSummary` makes the three shapes explicit instead of
//! padding partial records into full catalog types.

use serde::{Deserialize, Serialize};

use super::types::{MediaType, MovieRef, ShowRef};
use crate::history::WatchEvent;

/// One entry in a mixed media listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaSummary {
    /// A full movie record from the metadata service.
    Movie(MovieRef),
    /// A full show record from the metadata service.
    Show(ShowRef),
    /// A history row: only the fields the history store retains.
    HistoryStub {
        media_id: u32,
        media_type: MediaType,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster_path: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        backdrop_path: Option<String>,
        timestamp: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        season_number: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        episode_number: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        episode_name: Option<String>,
        progress: f32,
        completed: bool,
    },
}

impl MediaSummary {
    pub fn media_id(&self) -> u32 {
        match self {
            MediaSummary::Movie(m) => m.id,
            MediaSummary::Show(s) => s.id,
            MediaSummary::HistoryStub { media_id, .. } => *media_id,
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            MediaSummary::Movie(_) => MediaType::Movie,
            MediaSummary::Show(_) => MediaType::Tv,
            MediaSummary::HistoryStub { media_type, .. } => *media_type,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaSummary::Movie(m) => &m.title,
            MediaSummary::Show(s) => &s.name,
            MediaSummary::HistoryStub { title, .. } => title,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            MediaSummary::Movie(m) => m.poster_path.as_deref(),
            MediaSummary::Show(s) => s.poster_path.as_deref(),
            MediaSummary::HistoryStub { poster_path, .. } => poster_path.as_deref(),
        }
    }

    pub fn backdrop_path(&self) -> Option<&str> {
        match self {
            MediaSummary::Movie(m) => m.backdrop_path.as_deref(),
            MediaSummary::Show(s) => s.backdrop_path.as_deref(),
            MediaSummary::HistoryStub { backdrop_path, .. } => backdrop_path.as_deref(),
        }
    }
}

impl From<&WatchEvent> for MediaSummary {
    fn from(event: &WatchEvent) -> Self {
        MediaSummary::HistoryStub {
            media_id: event.media_id,
            media_type: event.media_type,
            title: event.title.clone(),
            poster_path: event.poster_path.clone(),
            backdrop_path: event.backdrop_path.clone(),
            timestamp: event.timestamp,
            season_number: event.season_number,
            episode_number: event.episode_number,
            episode_name: event.episode_name.clone(),
            progress: event.progress,
            completed: event.completed,
        }
    }
}

impl From<MovieRef> for MediaSummary {
    fn from(movie: MovieRef) -> Self {
        MediaSummary::Movie(movie)
    }
}

impl From<ShowRef> for MediaSummary {
    fn from(show: ShowRef) -> Self {
        MediaSummary::Show(show)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> WatchEvent {
        WatchEvent {
            media_id: 1396,
            media_type: MediaType::Tv,
            title: "Breaking Bad".to_string(),
            poster_path: Some("/bb.jpg".to_string()),
            backdrop_path: None,
            timestamp: 1_700_000_000_000,
            season_number: Some(2),
            episode_number: Some(5),
            episode_name: Some("Breakage".to_string()),
            progress: 0.8,
            completed: false,
        }
    }

    #[test]
    fn test_history_stub_from_watch_event() {
        let summary = MediaSummary::from(&event());
        assert_eq!(summary.media_id(), 1396);
        assert_eq!(summary.media_type(), MediaType::Tv);
        assert_eq!(summary.title(), "Breaking Bad");
        assert_eq!(summary.poster_path(), Some("/bb.jpg"));
        match summary {
            MediaSummary::HistoryStub {
                season_number,
                episode_number,
                progress,
                ..
            } => {
                assert_eq!(season_number, Some(2));
                assert_eq!(episode_number, Some(5));
                assert_eq!(progress, 0.8);
            }
            other => panic!("expected history stub, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_tag_names() {
        let movie = MediaSummary::Movie(MovieRef {
            id: 603,
            title: "The Matrix".to_string(),
            overview: None,
            release_date: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        });
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["kind"], "movie");
        assert_eq!(json["id"], 603);

        let stub = MediaSummary::from(&event());
        let json = serde_json::to_value(&stub).unwrap();
        assert_eq!(json["kind"], "history_stub");
        assert_eq!(json["media_type"], "tv");
    }

    #[test]
    fn test_round_trip_through_json() {
        let stub = MediaSummary::from(&event());
        let json = serde_json::to_string(&stub).unwrap();
        let back: MediaSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stub);
    }
}
