//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use super::{CatalogError, MetadataCatalog};
use crate::media::{MovieRef, ShowRef};
use crate::metrics;

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Time window for trending queries (default: week).
    #[serde(default)]
    pub trending_window: TrendingWindow,
}

fn default_timeout_seconds() -> u64 {
    10
}

/// TMDB trending time window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendingWindow {
    Day,
    #[default]
    Week,
}

impl TrendingWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

/// TMDB API client.
pub struct TmdbCatalog {
    client: Client,
    base_url: String,
    api_key: String,
    trending_window: TrendingWindow,
}

impl TmdbCatalog {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            trending_window: config.trending_window,
        })
    }

    /// Issue a GET to `path`, wrapped in metrics for `operation`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let timer = metrics::CATALOG_REQUEST_DURATION
            .with_label_values(&[operation])
            .start_timer();
        let result = self.fetch(path, query).await;
        timer.observe_duration();

        let status = if result.is_ok() { "success" } else { "error" };
        metrics::CATALOG_REQUESTS
            .with_label_values(&[operation, status])
            .inc();
        result
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(CatalogError::NotConfigured(
                "Invalid TMDB API key".to_string(),
            ));
        }
        if status == 404 {
            return Err(CatalogError::NotFound(path.to_string()));
        }
        if status == 429 {
            return Err(CatalogError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(format!("Failed to parse {path} response: {e}")))
    }
}

#[async_trait]
impl MetadataCatalog for TmdbCatalog {
    async fn movie(&self, id: u32) -> Result<MovieRef, CatalogError> {
        debug!(id, "TMDB get movie");
        let movie: MovieResult = self
            .get_json("movie", &format!("/movie/{id}"), &[])
            .await?;
        Ok(movie.into())
    }

    async fn show(&self, id: u32) -> Result<ShowRef, CatalogError> {
        debug!(id, "TMDB get show");
        let show: ShowResult = self.get_json("show", &format!("/tv/{id}"), &[]).await?;
        Ok(show.into())
    }

    async fn similar_movies(&self, id: u32) -> Result<Vec<MovieRef>, CatalogError> {
        debug!(id, "TMDB similar movies");
        let page: PageResponse<MovieResult> = self
            .get_json("similar_movies", &format!("/movie/{id}/similar"), &[])
            .await?;
        Ok(page.results.into_iter().map(Into::into).collect())
    }

    async fn trending_movies(&self) -> Result<Vec<MovieRef>, CatalogError> {
        let window = self.trending_window.as_str();
        debug!(window, "TMDB trending movies");
        let page: PageResponse<MovieResult> = self
            .get_json("trending_movies", &format!("/trending/movie/{window}"), &[])
            .await?;
        Ok(page.results.into_iter().map(Into::into).collect())
    }

    async fn trending_shows(&self) -> Result<Vec<ShowRef>, CatalogError> {
        let window = self.trending_window.as_str();
        debug!(window, "TMDB trending shows");
        let page: PageResponse<ShowResult> = self
            .get_json("trending_shows", &format!("/trending/tv/{window}"), &[])
            .await?;
        Ok(page.results.into_iter().map(Into::into).collect())
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRef>, CatalogError> {
        debug!(query, "TMDB movie search");
        let page: PageResponse<MovieResult> = self
            .get_json(
                "search_movies",
                "/search/movie",
                &[("query", query.to_string())],
            )
            .await?;
        Ok(page.results.into_iter().map(Into::into).collect())
    }

    async fn search_shows(&self, query: &str) -> Result<Vec<ShowRef>, CatalogError> {
        debug!(query, "TMDB show search");
        let page: PageResponse<ShowResult> = self
            .get_json(
                "search_shows",
                "/search/tv",
                &[("query", query.to_string())],
            )
            .await?;
        Ok(page.results.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct PageResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct MovieResult {
    id: u32,
    title: String,
    overview: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ShowResult {
    id: u32,
    name: String,
    overview: Option<String>,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f32>,
}

// ============================================================================
// Conversions
// ============================================================================

// TMDB sends empty strings for unknown dates and overviews.
fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<MovieResult> for MovieRef {
    fn from(r: MovieResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            overview: none_if_empty(r.overview),
            release_date: none_if_empty(r.release_date),
            poster_path: r.poster_path,
            backdrop_path: r.backdrop_path,
            vote_average: r.vote_average,
        }
    }
}

impl From<ShowResult> for ShowRef {
    fn from(r: ShowResult) -> Self {
        Self {
            id: r.id,
            name: r.name,
            overview: none_if_empty(r.overview),
            first_air_date: none_if_empty(r.first_air_date),
            poster_path: r.poster_path,
            backdrop_path: r.backdrop_path,
            vote_average: r.vote_average,
        }
    }
}
