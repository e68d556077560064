//! Watch-history API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use reelfeed_core::{MediaSummary, MediaType, RecordWatch};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// One history row, with image paths resolved to full URLs.
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    #[serde(flatten)]
    pub summary: MediaSummary,
    /// Full poster URL, if the entry kept a poster path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Full backdrop URL, if the entry kept a backdrop path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
}

/// Response for the progress lookup endpoint.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub media_id: u32,
    pub media_type: MediaType,
    pub progress: f32,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/history
///
/// Accepts the event unconditionally. Invalid payloads are dropped by the
/// store rather than rejected, so playback reporting never sees an error.
pub async fn record_watch(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordWatch>,
) -> StatusCode {
    state.history().record(body);
    StatusCode::ACCEPTED
}

/// GET /api/v1/history
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryEntryResponse>> {
    let images = state.images();
    let entries = state
        .history()
        .list()
        .iter()
        .map(|event| {
            let summary = MediaSummary::from(event);
            let poster_url = summary.poster_path().map(|p| images.poster_url(p));
            let backdrop_url = summary.backdrop_path().map(|p| images.backdrop_url(p));
            HistoryEntryResponse {
                summary,
                poster_url,
                backdrop_url,
            }
        })
        .collect();
    Json(entries)
}

/// DELETE /api/v1/history/{media_type}/{media_id}
pub async fn remove_entry(
    State(state): State<Arc<AppState>>,
    Path((media_type, media_id)): Path<(MediaType, u32)>,
) -> StatusCode {
    state.history().remove(media_id, media_type);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/history
pub async fn clear_history(State(state): State<Arc<AppState>>) -> StatusCode {
    state.history().clear();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/history/{media_type}/{media_id}/progress
///
/// Returns 0.0 for entries that were never recorded, so players can always
/// seed their resume position from this endpoint.
pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    Path((media_type, media_id)): Path<(MediaType, u32)>,
) -> Json<ProgressResponse> {
    let progress = state.history().progress_for(media_id, media_type);
    Json(ProgressResponse {
        media_id,
        media_type,
        progress,
    })
}
