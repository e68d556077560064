//! Metadata catalog API handlers.
//!
//! Thin passthroughs over the configured [`MetadataCatalog`]: trending rails,
//! search, and per-title details. Records are returned as the catalog shaped
//! them, with image paths left relative for the client to resolve.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use reelfeed_core::{CatalogError, MovieRef, ShowRef};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a catalog failure onto the status the client should see.
///
/// Missing titles are the client's problem, a missing API key is ours, and
/// everything else is the upstream service misbehaving.
fn catalog_error(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        CatalogError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/trending/movies
pub async fn trending_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MovieRef>>, impl IntoResponse> {
    match state.catalog().trending_movies().await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => Err(catalog_error(e)),
    }
}

/// GET /api/v1/trending/shows
pub async fn trending_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShowRef>>, impl IntoResponse> {
    match state.catalog().trending_shows().await {
        Ok(shows) => Ok(Json(shows)),
        Err(e) => Err(catalog_error(e)),
    }
}

/// GET /api/v1/search/movies?query=...
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MovieRef>>, impl IntoResponse> {
    match state.catalog().search_movies(&params.query).await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => Err(catalog_error(e)),
    }
}

/// GET /api/v1/search/shows?query=...
pub async fn search_shows(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ShowRef>>, impl IntoResponse> {
    match state.catalog().search_shows(&params.query).await {
        Ok(shows) => Ok(Json(shows)),
        Err(e) => Err(catalog_error(e)),
    }
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MovieRef>, impl IntoResponse> {
    match state.catalog().movie(id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(e) => Err(catalog_error(e)),
    }
}

/// GET /api/v1/shows/{id}
pub async fn get_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<ShowRef>, impl IntoResponse> {
    match state.catalog().show(id).await {
        Ok(show) => Ok(Json(show)),
        Err(e) => Err(catalog_error(e)),
    }
}

/// GET /api/v1/movies/{id}/similar
pub async fn similar_movies(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<MovieRef>>, impl IntoResponse> {
    match state.catalog().similar_movies(id).await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => Err(catalog_error(e)),
    }
}
