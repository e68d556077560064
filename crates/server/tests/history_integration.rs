//! Integration tests for the watch-history endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestFixture;

fn watch_body(media_id: u32, progress: f32) -> serde_json::Value {
    json!({
        "media_id": media_id,
        "media_type": "movie",
        "title": format!("Movie {}", media_id),
        "poster_path": "/poster.jpg",
        "progress": progress,
        "completed": progress >= 1.0
    })
}

// =============================================================================
// Record + List
// =============================================================================

#[tokio::test]
async fn test_record_and_list_round_trip() {
    let fixture = TestFixture::new().await;

    let response = fixture.post("/api/v1/history", watch_body(603, 1.0)).await;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    let response = fixture.get("/api/v1/history").await;
    assert_eq!(response.status, StatusCode::OK);

    let entries = response.body.as_array().expect("expected a JSON array");
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry["kind"], "history_stub");
    assert_eq!(entry["media_id"], 603);
    assert_eq!(entry["media_type"], "movie");
    assert_eq!(entry["title"], "Movie 603");
    assert_eq!(entry["completed"], true);
    assert_eq!(
        entry["poster_url"],
        "https://image.tmdb.org/t/p/w342/poster.jpg"
    );
    // No backdrop was reported, so no URL is built
    assert!(entry["backdrop_url"].is_null());
}

#[tokio::test]
async fn test_rewatch_replaces_entry() {
    let fixture = TestFixture::new().await;

    fixture.post("/api/v1/history", watch_body(603, 0.3)).await;
    fixture.post("/api/v1/history", watch_body(42, 1.0)).await;
    fixture.post("/api/v1/history", watch_body(603, 0.9)).await;

    let response = fixture.get("/api/v1/history").await;
    let entries = response.body.as_array().unwrap();

    // The rewatch moved 603 back to the front, still a single entry
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["media_id"], 603);
    assert!((entries[0]["progress"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert_eq!(entries[1]["media_id"], 42);
}

#[tokio::test]
async fn test_record_persists_through_storage() {
    let fixture = TestFixture::new().await;

    fixture.post("/api/v1/history", watch_body(603, 1.0)).await;

    let payload = fixture.storage.payload().expect("no payload persisted");
    assert!(payload.contains("603"));
}

// =============================================================================
// Validation at the API boundary
// =============================================================================

#[tokio::test]
async fn test_invalid_event_is_dropped_not_rejected() {
    let fixture = TestFixture::new().await;

    // media_id zero fails validation, but playback reporting still gets a 202
    let response = fixture.post("/api/v1/history", watch_body(0, 1.0)).await;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    let response = fixture.get("/api/v1/history").await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let fixture = TestFixture::new().await;

    let response = fixture.post_raw("/api/v1/history", "{not json").await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_missing_required_fields_rejected() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .post("/api/v1/history", json!({ "media_id": 603 }))
        .await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_title_is_sanitized_through_the_api() {
    let fixture = TestFixture::new().await;

    fixture
        .post(
            "/api/v1/history",
            json!({
                "media_id": 603,
                "media_type": "movie",
                "title": "<script>alert(1)</script>The Matrix",
                "poster_path": "../../etc/passwd",
                "completed": true
            }),
        )
        .await;

    let response = fixture.get("/api/v1/history").await;
    let entry = &response.body.as_array().unwrap()[0];

    assert_eq!(entry["title"], "alert(1)The Matrix");
    // The traversal-looking path was dropped entirely
    assert!(entry["poster_path"].is_null());
    assert!(entry["poster_url"].is_null());
}

// =============================================================================
// Remove + Clear
// =============================================================================

#[tokio::test]
async fn test_remove_single_entry() {
    let fixture = TestFixture::new().await;

    fixture.post("/api/v1/history", watch_body(603, 1.0)).await;
    fixture.post("/api/v1/history", watch_body(42, 0.5)).await;

    let response = fixture.delete("/api/v1/history/movie/603").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = fixture.get("/api/v1/history").await;
    let entries = response.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["media_id"], 42);
}

#[tokio::test]
async fn test_remove_is_type_scoped() {
    let fixture = TestFixture::new().await;

    fixture.post("/api/v1/history", watch_body(77, 1.0)).await;

    // Same ID, wrong type: nothing happens
    let response = fixture.delete("/api/v1/history/tv/77").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = fixture.get("/api/v1/history").await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_history() {
    let fixture = TestFixture::new().await;

    fixture.post("/api/v1/history", watch_body(603, 1.0)).await;
    fixture.post("/api/v1/history", watch_body(42, 0.5)).await;

    let response = fixture.delete("/api/v1/history").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = fixture.get("/api/v1/history").await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

// =============================================================================
// Progress Lookup
// =============================================================================

#[tokio::test]
async fn test_progress_for_recorded_entry() {
    let fixture = TestFixture::new().await;

    fixture.post("/api/v1/history", watch_body(603, 0.42)).await;

    let response = fixture.get("/api/v1/history/movie/603/progress").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["media_id"], 603);
    assert_eq!(response.body["media_type"], "movie");
    assert!((response.body["progress"].as_f64().unwrap() - 0.42).abs() < 1e-6);
}

#[tokio::test]
async fn test_progress_for_unknown_entry_is_zero() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/history/movie/999/progress").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["progress"].as_f64().unwrap(), 0.0);
}

// =============================================================================
// Episode Context
// =============================================================================

#[tokio::test]
async fn test_episode_fields_survive_the_round_trip() {
    let fixture = TestFixture::new().await;

    fixture
        .post(
            "/api/v1/history",
            json!({
                "media_id": 1396,
                "media_type": "tv",
                "title": "Breaking Bad",
                "season_number": 2,
                "episode_number": 5,
                "episode_name": "Breakage",
                "progress": 0.8
            }),
        )
        .await;

    let response = fixture.get("/api/v1/history").await;
    let entry = &response.body.as_array().unwrap()[0];

    assert_eq!(entry["media_type"], "tv");
    assert_eq!(entry["season_number"], 2);
    assert_eq!(entry["episode_number"], 5);
    assert_eq!(entry["episode_name"], "Breakage");
    assert_eq!(entry["completed"], false);
}
