use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - TMDB section exists (enforced by serde)
/// - Server port is not 0
/// - History cap and recommender knobs are usable values
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // TMDB validation
    if config.tmdb.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.api_key cannot be empty".to_string(),
        ));
    }

    // History validation
    if config.history.max_entries == 0 {
        return Err(ConfigError::ValidationError(
            "history.max_entries must be at least 1".to_string(),
        ));
    }

    // Recommender validation
    let rec = &config.recommender;
    if !(0.0..=1.0).contains(&rec.content_weight) {
        return Err(ConfigError::ValidationError(
            "recommender.content_weight must be between 0 and 1".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&rec.trending_weight) {
        return Err(ConfigError::ValidationError(
            "recommender.trending_weight must be between 0 and 1".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&rec.interest_threshold) {
        return Err(ConfigError::ValidationError(
            "recommender.interest_threshold must be between 0 and 1".to_string(),
        ));
    }
    if rec.min_results == 0 {
        return Err(ConfigError::ValidationError(
            "recommender.min_results must be at least 1".to_string(),
        ));
    }
    if rec.max_seeds == 0 {
        return Err(ConfigError::ValidationError(
            "recommender.max_seeds must be at least 1".to_string(),
        ));
    }
    if rec.per_seed_cap == 0 {
        return Err(ConfigError::ValidationError(
            "recommender.per_seed_cap must be at least 1".to_string(),
        ));
    }

    Ok(())
}
