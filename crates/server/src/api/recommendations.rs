//! Recommendation feed handler.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use reelfeed_core::MovieRef;

use crate::state::AppState;

/// One recommended movie, with image paths resolved to full URLs.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub movie: MovieRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
}

/// GET /api/v1/recommendations
///
/// Always answers 200 with a list. An empty list means the catalog was
/// unreachable or there was nothing to recommend, never a client error.
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<RecommendationResponse>> {
    let images = state.images();
    let feed = state
        .engine()
        .recommendations()
        .await
        .into_iter()
        .map(|movie| {
            let poster_url = movie.poster_path.as_deref().map(|p| images.poster_url(p));
            let backdrop_url = movie
                .backdrop_path
                .as_deref()
                .map(|p| images.backdrop_url(p));
            RecommendationResponse {
                movie,
                poster_url,
                backdrop_url,
            }
        })
        .collect();
    Json(feed)
}
