//! The recommendation facade.
//!
//! One externally visible call assembles the whole pipeline: history read,
//! seed extraction, parallel similar-title lookups, ranking, trending
//! top-up. Failure anywhere degrades the feed instead of erroring: a feed
//! request never hard-fails the caller.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use super::config::RecommenderConfig;
use super::interest::high_interest;
use super::ranker::RankedFeed;
use crate::catalog::{CatalogError, MetadataCatalog};
use crate::history::HistoryStore;
use crate::media::MovieRef;
use crate::metrics;

pub struct RecommendationEngine {
    history: Arc<HistoryStore>,
    catalog: Arc<dyn MetadataCatalog>,
    config: RecommenderConfig,
}

impl RecommendationEngine {
    pub fn new(
        history: Arc<HistoryStore>,
        catalog: Arc<dyn MetadataCatalog>,
        config: RecommenderConfig,
    ) -> Self {
        Self {
            history,
            catalog,
            config,
        }
    }

    /// An ordered feed of movies for the user. Never fails: if the
    /// pipeline breaks the feed degrades to the raw trending pool, and if
    /// even that is unreachable, to an empty list.
    pub async fn recommendations(&self) -> Vec<MovieRef> {
        match self.personalized_feed().await {
            Ok(feed) => {
                metrics::RECOMMENDATION_REQUESTS
                    .with_label_values(&["personalized"])
                    .inc();
                metrics::RECOMMENDATION_RESULTS.observe(feed.len() as f64);
                feed
            }
            Err(e) => {
                warn!(error = %e, "recommendation pipeline failed, falling back to trending");
                metrics::RECOMMENDATION_REQUESTS
                    .with_label_values(&["fallback"])
                    .inc();
                self.trending_fallback().await
            }
        }
    }

    async fn personalized_feed(&self) -> Result<Vec<MovieRef>, CatalogError> {
        let history = self.history.list();
        let seeds: Vec<u32> = high_interest(&history, &self.config)
            .iter()
            .map(|e| e.media_id)
            .collect();

        debug!(
            history = history.len(),
            seeds = seeds.len(),
            "building recommendation feed"
        );
        metrics::RECOMMENDATION_SEEDS.observe(seeds.len() as f64);

        let mut feed = RankedFeed::new(history.iter().map(|e| e.media_id), &self.config);
        for similar in self.fetch_similar(&seeds).await {
            feed.add_content(similar);
        }

        // The trending pool is only consulted when the personalized feed
        // comes up short.
        if feed.len() < self.config.min_results {
            let trending = self.catalog.trending_movies().await?;
            metrics::TRENDING_FILLS.inc();
            feed.add_trending(trending);
        }

        Ok(feed.finalize())
    }

    /// One similar-titles lookup per seed, issued in parallel. A failed
    /// lookup contributes an empty list without aborting its siblings.
    async fn fetch_similar(&self, seeds: &[u32]) -> Vec<Vec<MovieRef>> {
        let lookups = seeds
            .iter()
            .map(|&seed| async move { (seed, self.catalog.similar_movies(seed).await) });

        join_all(lookups)
            .await
            .into_iter()
            .map(|(seed, result)| match result {
                Ok(mut movies) => {
                    movies.truncate(self.config.per_seed_cap);
                    movies
                }
                Err(e) => {
                    warn!(seed, error = %e, "similar-titles lookup failed, skipping seed");
                    Vec::new()
                }
            })
            .collect()
    }

    /// Last-resort feed: the trending pool as the service returned it.
    async fn trending_fallback(&self) -> Vec<MovieRef> {
        match self.catalog.trending_movies().await {
            Ok(trending) => trending,
            Err(e) => {
                warn!(error = %e, "trending fallback failed, returning empty feed");
                Vec::new()
            }
        }
    }
}
