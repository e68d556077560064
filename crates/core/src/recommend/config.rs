//! Recommendation engine configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the hybrid recommendation pipeline.
///
/// The defaults reproduce the behavior the engine shipped with; none of
/// them are load-bearing beyond "personalized results sort ahead of
/// trending and small feeds get topped up".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Sort weight for candidates derived from a watched seed.
    #[serde(default = "default_content_weight")]
    pub content_weight: f32,

    /// Sort weight for candidates taken from the trending pool.
    #[serde(default = "default_trending_weight")]
    pub trending_weight: f32,

    /// Feeds smaller than this are topped up from the trending pool.
    #[serde(default = "default_min_results")]
    pub min_results: usize,

    /// Number of most-recent high-interest entries used as seeds.
    #[serde(default = "default_max_seeds")]
    pub max_seeds: usize,

    /// Maximum candidates contributed by one seed.
    #[serde(default = "default_per_seed_cap")]
    pub per_seed_cap: usize,

    /// Progress above which an unfinished watch still counts as
    /// high interest.
    #[serde(default = "default_interest_threshold")]
    pub interest_threshold: f32,
}

fn default_content_weight() -> f32 {
    0.9
}

fn default_trending_weight() -> f32 {
    0.5
}

fn default_min_results() -> usize {
    10
}

fn default_max_seeds() -> usize {
    3
}

fn default_per_seed_cap() -> usize {
    5
}

fn default_interest_threshold() -> f32 {
    0.8
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            content_weight: default_content_weight(),
            trending_weight: default_trending_weight(),
            min_results: default_min_results(),
            max_seeds: default_max_seeds(),
            per_seed_cap: default_per_seed_cap(),
            interest_threshold: default_interest_threshold(),
        }
    }
}
