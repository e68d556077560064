use std::sync::Arc;
use reelfeed_core::{
    Config, HistoryStore, ImageUrlBuilder, MetadataCatalog, RecommendationEngine, SanitizedConfig,
};

/// Shared application state
pub struct AppState {
    config: Config,
    history: Arc<HistoryStore>,
    catalog: Arc<dyn MetadataCatalog>,
    engine: RecommendationEngine,
    images: ImageUrlBuilder,
}

impl AppState {
    pub fn new(
        config: Config,
        history: Arc<HistoryStore>,
        catalog: Arc<dyn MetadataCatalog>,
        engine: RecommendationEngine,
        images: ImageUrlBuilder,
    ) -> Self {
        Self {
            config,
            history,
            catalog,
            engine,
            images,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn catalog(&self) -> &dyn MetadataCatalog {
        self.catalog.as_ref()
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }
}
