//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the catalog and storage
//! traits, allowing the recommendation pipeline and the HTTP API to be
//! tested without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use reelfeed_core::testing::{fixtures, MockCatalog};
//!
//! let catalog = MockCatalog::new();
//!
//! // Configure mock responses
//! catalog.set_similar(603, vec![fixtures::movie(1)]).await;
//! catalog.set_trending_movies(vec![fixtures::movie(2)]).await;
//!
//! // Use behind Arc<dyn MetadataCatalog>...
//! ```

mod mock_catalog;
mod mock_storage;

pub use mock_catalog::{MockCatalog, RecordedQuery};
pub use mock_storage::MockHistoryStorage;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::media::{MovieRef, ShowRef};

    /// Create a test movie with a deterministic title derived from the id.
    pub fn movie(id: u32) -> MovieRef {
        titled_movie(id, &format!("Movie {}", id))
    }

    /// Create a test movie with an explicit title.
    pub fn titled_movie(id: u32, title: &str) -> MovieRef {
        MovieRef {
            id,
            title: title.to_string(),
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            release_date: Some("2023-06-15".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            vote_average: Some(7.5),
        }
    }

    /// Create a test show with a deterministic name derived from the id.
    pub fn show(id: u32) -> ShowRef {
        titled_show(id, &format!("Show {}", id))
    }

    /// Create a test show with an explicit name.
    pub fn titled_show(id: u32, name: &str) -> ShowRef {
        ShowRef {
            id,
            name: name.to_string(),
            overview: Some(format!("A series about {}.", name.to_lowercase())),
            first_air_date: Some("2021-01-01".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            vote_average: Some(8.0),
        }
    }
}
