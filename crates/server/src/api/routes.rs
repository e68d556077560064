use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{catalog, handlers, history, middleware::metrics_middleware, recommendations};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Watch history
        .route("/history", post(history::record_watch))
        .route("/history", get(history::list_history))
        .route("/history", delete(history::clear_history))
        .route("/history/{media_type}/{media_id}", delete(history::remove_entry))
        .route(
            "/history/{media_type}/{media_id}/progress",
            get(history::get_progress),
        )
        // Recommendations
        .route("/recommendations", get(recommendations::get_recommendations))
        // Catalog passthrough
        .route("/trending/movies", get(catalog::trending_movies))
        .route("/trending/shows", get(catalog::trending_shows))
        .route("/search/movies", get(catalog::search_movies))
        .route("/search/shows", get(catalog::search_shows))
        .route("/movies/{id}", get(catalog::get_movie))
        .route("/movies/{id}/similar", get(catalog::similar_movies))
        .route("/shows/{id}", get(catalog::get_show));

    Router::new()
        .nest("/api/v1", api_routes)
        // Prometheus scrape endpoint sits outside the versioned API
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
