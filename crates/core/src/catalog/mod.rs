//! Metadata service integration.
//!
//! The recommendation pipeline and the API surface talk to the movie
//! metadata service through the [`MetadataCatalog`] trait; [`TmdbCatalog`]
//! is the production implementation.

mod tmdb;

pub use tmdb::{TmdbCatalog, TmdbConfig, TrendingWindow};

use async_trait::async_trait;
use thiserror::Error;

use crate::media::{MovieRef, ShowRef};

/// Errors that can occur when querying the metadata service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (transport error or timeout).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Read-only client for the movie metadata service.
#[async_trait]
pub trait MetadataCatalog: Send + Sync {
    /// Get a specific movie by ID.
    async fn movie(&self, id: u32) -> Result<MovieRef, CatalogError>;

    /// Get a specific show by ID.
    async fn show(&self, id: u32) -> Result<ShowRef, CatalogError>;

    /// Movies similar to the given one, in service ranking order.
    async fn similar_movies(&self, id: u32) -> Result<Vec<MovieRef>, CatalogError>;

    /// Trending movies for the configured window.
    async fn trending_movies(&self) -> Result<Vec<MovieRef>, CatalogError>;

    /// Trending shows for the configured window.
    async fn trending_shows(&self) -> Result<Vec<ShowRef>, CatalogError>;

    /// Search movies by title.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRef>, CatalogError>;

    /// Search shows by title.
    async fn search_shows(&self, query: &str) -> Result<Vec<ShowRef>, CatalogError>;
}
