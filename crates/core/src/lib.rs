pub mod catalog;
pub mod config;
pub mod history;
pub mod images;
pub mod media;
pub mod metrics;
pub mod nav;
pub mod recommend;
pub mod testing;

pub use catalog::{CatalogError, MetadataCatalog, TmdbCatalog, TmdbConfig, TrendingWindow};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, HistoryConfig,
    SanitizedConfig, ServerConfig,
};
pub use history::{FileStorage, HistoryStorage, HistoryStore, RecordWatch, WatchEvent};
pub use images::{ImageQuality, ImageSettings, ImageUrlBuilder};
pub use media::{MediaSummary, MediaType, MovieRef, ShowRef};
pub use nav::{NavChange, NavStack, Overlay};
pub use recommend::{RecommendationEngine, RecommenderConfig};
