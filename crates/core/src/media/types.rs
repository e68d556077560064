//! Core media types shared across the history store, the recommendation
//! pipeline, and the API surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media a record refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// A feature film.
    Movie,
    /// A TV series (history entries carry season/episode context).
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie as returned by the metadata service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRef {
    /// Metadata service movie ID.
    pub id: u32,
    /// Movie title.
    pub title: String,
    /// Movie overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Poster path (relative to the image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path (relative to the image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

impl MovieRef {
    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}

/// A TV show as returned by the metadata service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowRef {
    /// Metadata service show ID.
    pub id: u32,
    /// Show name.
    pub name: String,
    /// Show overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// First air date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

impl ShowRef {
    /// Get the first-air year from the first air date.
    pub fn year(&self) -> Option<u32> {
        self.first_air_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaType::Movie).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&MediaType::Tv).unwrap(), "\"tv\"");
    }

    #[test]
    fn test_media_type_deserializes_lowercase() {
        let t: MediaType = serde_json::from_str("\"tv\"").unwrap();
        assert_eq!(t, MediaType::Tv);
    }

    #[test]
    fn test_movie_year_from_release_date() {
        let movie = MovieRef {
            id: 603,
            title: "The Matrix".to_string(),
            overview: None,
            release_date: Some("1999-03-31".to_string()),
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        };
        assert_eq!(movie.year(), Some(1999));
    }

    #[test]
    fn test_movie_year_missing_date() {
        let movie = MovieRef {
            id: 1,
            title: "Unknown".to_string(),
            overview: None,
            release_date: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        };
        assert_eq!(movie.year(), None);
    }

    #[test]
    fn test_show_year_from_first_air_date() {
        let show = ShowRef {
            id: 1396,
            name: "Breaking Bad".to_string(),
            overview: None,
            first_air_date: Some("2008-01-20".to_string()),
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        };
        assert_eq!(show.year(), Some(2008));
    }
}
