//! Mock metadata catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, MetadataCatalog};
use crate::media::{MovieRef, ShowRef};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedQuery {
    Movie { id: u32 },
    Show { id: u32 },
    SimilarMovies { id: u32 },
    TrendingMovies,
    TrendingShows,
    SearchMovies { query: String },
    SearchShows { query: String },
}

/// Mock implementation of the MetadataCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable movie/show/similar/trending results
/// - Track queries for assertions
/// - Simulate failures
///
/// Lookups for ids with no configured entry fail with
/// [`CatalogError::NotFound`]; trending pools default to empty lists.
#[derive(Debug)]
pub struct MockCatalog {
    /// Movies by id.
    movies: Arc<RwLock<HashMap<u32, MovieRef>>>,
    /// Shows by id.
    shows: Arc<RwLock<HashMap<u32, ShowRef>>>,
    /// Similar-movie lists keyed by seed id.
    similar: Arc<RwLock<HashMap<u32, Vec<MovieRef>>>>,
    /// Trending movie pool.
    trending_movies: Arc<RwLock<Vec<MovieRef>>>,
    /// Trending show pool.
    trending_shows: Arc<RwLock<Vec<ShowRef>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next operation fails with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(HashMap::new())),
            shows: Arc::new(RwLock::new(HashMap::new())),
            similar: Arc::new(RwLock::new(HashMap::new())),
            trending_movies: Arc::new(RwLock::new(Vec::new())),
            trending_shows: Arc::new(RwLock::new(Vec::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Catalog Configuration
    // =========================================================================

    /// Add a movie looked up by id.
    pub async fn add_movie(&self, movie: MovieRef) {
        self.movies.write().await.insert(movie.id, movie);
    }

    /// Add a show looked up by id.
    pub async fn add_show(&self, show: ShowRef) {
        self.shows.write().await.insert(show.id, show);
    }

    /// Set the similar-movies list returned for a seed id.
    pub async fn set_similar(&self, seed_id: u32, movies: Vec<MovieRef>) {
        self.similar.write().await.insert(seed_id, movies);
    }

    /// Set the trending movie pool.
    pub async fn set_trending_movies(&self, movies: Vec<MovieRef>) {
        *self.trending_movies.write().await = movies;
    }

    /// Set the trending show pool.
    pub async fn set_trending_shows(&self, shows: Vec<ShowRef>) {
        *self.trending_shows.write().await = shows;
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    /// Record a query.
    async fn record(&self, query: RecordedQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl MetadataCatalog for MockCatalog {
    async fn movie(&self, id: u32) -> Result<MovieRef, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::Movie { id }).await;

        self.movies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Movie {} not found", id)))
    }

    async fn show(&self, id: u32) -> Result<ShowRef, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::Show { id }).await;

        self.shows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Show {} not found", id)))
    }

    async fn similar_movies(&self, id: u32) -> Result<Vec<MovieRef>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::SimilarMovies { id }).await;

        self.similar
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("No similar titles for {}", id)))
    }

    async fn trending_movies(&self) -> Result<Vec<MovieRef>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::TrendingMovies).await;

        Ok(self.trending_movies.read().await.clone())
    }

    async fn trending_shows(&self) -> Result<Vec<ShowRef>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::TrendingShows).await;

        Ok(self.trending_shows.read().await.clone())
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRef>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::SearchMovies {
            query: query.to_string(),
        })
        .await;

        let movies = self.movies.read().await;
        let query_lower = query.to_lowercase();

        let mut results: Vec<MovieRef> = movies
            .values()
            .filter(|m| m.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();
        results.sort_by_key(|m| m.id);

        Ok(results)
    }

    async fn search_shows(&self, query: &str) -> Result<Vec<ShowRef>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::SearchShows {
            query: query.to_string(),
        })
        .await;

        let shows = self.shows.read().await;
        let query_lower = query.to_lowercase();

        let mut results: Vec<ShowRef> = shows
            .values()
            .filter(|s| s.name.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();
        results.sort_by_key(|s| s.id);

        Ok(results)
    }
}
