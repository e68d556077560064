//! High-interest signal extraction from watch history.

use super::config::RecommenderConfig;
use crate::history::WatchEvent;
use crate::media::MediaType;

/// Movies the user finished or nearly finished, most recent first.
///
/// This is the entire interest model: a hard threshold over history, not a
/// learned function. An empty result is the normal state for new users.
/// Only movies qualify; show entries never seed the movie recommender.
pub fn high_interest<'a>(
    history: &'a [WatchEvent],
    config: &RecommenderConfig,
) -> Vec<&'a WatchEvent> {
    history
        .iter()
        .filter(|e| e.media_type == MediaType::Movie)
        .filter(|e| e.completed || e.progress > config.interest_threshold)
        .take(config.max_seeds)
        .collect()
}
