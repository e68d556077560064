use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelfeed_core::{
    load_config, validate_config, FileStorage, HistoryStorage, HistoryStore, ImageUrlBuilder,
    MetadataCatalog, RecommendationEngine, TmdbCatalog,
};

use reelfeed_server::api::create_router;
use reelfeed_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("REELFEED_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("History file: {:?}", config.history.path);
    info!("History cap: {} entries", config.history.max_entries);

    // Create the history store over its file-backed storage
    let storage: Arc<dyn HistoryStorage> = Arc::new(FileStorage::new(&config.history.path));
    let history = Arc::new(HistoryStore::new(storage, config.history.max_entries));
    info!("History store initialized ({} entries)", history.list().len());

    // Create the TMDB metadata catalog
    let catalog: Arc<dyn MetadataCatalog> = Arc::new(
        TmdbCatalog::new(config.tmdb.clone()).context("Failed to create metadata catalog")?,
    );
    info!("Metadata catalog initialized");

    // Create the recommendation engine
    let engine = RecommendationEngine::new(
        Arc::clone(&history),
        Arc::clone(&catalog),
        config.recommender.clone(),
    );
    info!("Recommendation engine initialized");

    // Image URL builder for history and recommendation responses
    let images = ImageUrlBuilder::new(&config.images);

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        history,
        catalog,
        engine,
        images,
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
