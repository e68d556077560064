//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock dependencies injected, enabling comprehensive E2E testing
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reelfeed_core::{
    testing::{MockCatalog, MockHistoryStorage},
    Config, HistoryConfig, HistoryStorage, HistoryStore, ImageSettings, ImageUrlBuilder,
    MetadataCatalog, RecommendationEngine, RecommenderConfig, ServerConfig, TmdbConfig,
    TrendingWindow,
};

/// Re-export fixtures for test convenience
pub use reelfeed_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Metadata catalog (MockCatalog)
/// - History persistence (MockHistoryStorage)
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_trending() {
///     let fixture = TestFixture::new().await;
///     fixture.catalog.set_trending_movies(vec![fixtures::movie(1)]).await;
///
///     let response = fixture.get("/api/v1/trending/movies").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock metadata catalog - configure titles, similar lists, trending
    pub catalog: Arc<MockCatalog>,
    /// Mock history storage - inspect persisted payloads, inject failures
    pub storage: Arc<MockHistoryStorage>,
    /// History store backing the router, for direct state assertions
    pub history: Arc<HistoryStore>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

fn test_config() -> Config {
    Config {
        tmdb: TmdbConfig {
            api_key: "test-key".to_string(),
            base_url: None,
            timeout_seconds: 10,
            trending_window: TrendingWindow::default(),
        },
        server: ServerConfig::default(),
        history: HistoryConfig::default(),
        recommender: RecommenderConfig::default(),
        images: ImageSettings::default(),
    }
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub async fn new() -> Self {
        let config = test_config();

        let catalog = Arc::new(MockCatalog::new());
        let storage = Arc::new(MockHistoryStorage::new());

        let history = Arc::new(HistoryStore::new(
            Arc::clone(&storage) as Arc<dyn HistoryStorage>,
            config.history.max_entries,
        ));

        let engine = RecommendationEngine::new(
            Arc::clone(&history),
            Arc::clone(&catalog) as Arc<dyn MetadataCatalog>,
            config.recommender.clone(),
        );

        let images = ImageUrlBuilder::new(&config.images);

        let state = Arc::new(reelfeed_server::state::AppState::new(
            config,
            Arc::clone(&history),
            Arc::clone(&catalog) as Arc<dyn MetadataCatalog>,
            engine,
            images,
        ));

        let router = reelfeed_server::api::create_router(state);

        Self {
            router,
            catalog,
            storage,
            history,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request and return the raw body as text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).to_string())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
