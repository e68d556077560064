//! Candidate accumulation and ranking.
//!
//! The feed is built in two passes: content-based candidates in fetch
//! order, then (only when the feed is thin) the trending pool in API order.
//! Every accepted id joins the seen set so no movie appears twice and
//! nothing from history is ever re-recommended.

use std::collections::HashSet;

use super::config::RecommenderConfig;
use crate::media::MovieRef;

/// Where a candidate came from. The source fixes its weight tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    ContentBased,
    Trending,
}

/// A movie plus the bookkeeping the ranker sorts by. The weight is a
/// coarse priority tier, not a learned score.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub movie: MovieRef,
    pub source: CandidateSource,
    pub weight: f32,
}

/// Accumulates candidates, deduplicating against history and against
/// already-accepted candidates.
pub struct RankedFeed {
    seen: HashSet<u32>,
    candidates: Vec<Candidate>,
    content_weight: f32,
    trending_weight: f32,
}

impl RankedFeed {
    /// Start a feed whose seen set already covers every id in history.
    pub fn new(history_ids: impl IntoIterator<Item = u32>, config: &RecommenderConfig) -> Self {
        Self {
            seen: history_ids.into_iter().collect(),
            candidates: Vec::new(),
            content_weight: config.content_weight,
            trending_weight: config.trending_weight,
        }
    }

    /// Add one seed's similar-title results in fetch order.
    pub fn add_content(&mut self, movies: Vec<MovieRef>) {
        self.add(movies, CandidateSource::ContentBased, self.content_weight);
    }

    /// Top up from the trending pool in API order.
    pub fn add_trending(&mut self, movies: Vec<MovieRef>) {
        self.add(movies, CandidateSource::Trending, self.trending_weight);
    }

    fn add(&mut self, movies: Vec<MovieRef>, source: CandidateSource, weight: f32) {
        for movie in movies {
            if self.seen.insert(movie.id) {
                self.candidates.push(Candidate {
                    movie,
                    source,
                    weight,
                });
            }
        }
    }

    /// Candidates accepted so far.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Stable-sort by weight descending and project to bare movies.
    /// Ties keep insertion order, so content-based candidates stay ahead
    /// of trending ones and each source keeps its fetch order.
    pub fn finalize(mut self) -> Vec<MovieRef> {
        self.candidates.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.candidates.into_iter().map(|c| c.movie).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32) -> MovieRef {
        MovieRef {
            id,
            title: format!("Movie {id}"),
            overview: None,
            release_date: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        }
    }

    fn movies(ids: &[u32]) -> Vec<MovieRef> {
        ids.iter().copied().map(movie).collect()
    }

    fn config() -> RecommenderConfig {
        RecommenderConfig::default()
    }

    #[test]
    fn test_history_ids_are_never_recommended() {
        let mut feed = RankedFeed::new([10, 20], &config());
        feed.add_content(movies(&[10, 30]));
        let result = feed.finalize();
        let ids: Vec<u32> = result.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![30]);
    }

    #[test]
    fn test_dedup_across_seed_lists() {
        let mut feed = RankedFeed::new([], &config());
        feed.add_content(movies(&[1, 2]));
        feed.add_content(movies(&[2, 3]));
        let ids: Vec<u32> = feed.finalize().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_trending_skips_already_accepted() {
        let mut feed = RankedFeed::new([], &config());
        feed.add_content(movies(&[1, 2]));
        feed.add_trending(movies(&[2, 3]));
        let ids: Vec<u32> = feed.finalize().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_content_sorts_ahead_of_trending() {
        let mut feed = RankedFeed::new([], &config());
        feed.add_trending(movies(&[100, 101]));
        feed.add_content(movies(&[1, 2]));
        let ids: Vec<u32> = feed.finalize().iter().map(|m| m.id).collect();
        // Content weight 0.9 beats trending 0.5 regardless of insertion order.
        assert_eq!(ids, vec![1, 2, 100, 101]);
    }

    #[test]
    fn test_fetch_order_preserved_within_source() {
        let mut feed = RankedFeed::new([], &config());
        feed.add_content(movies(&[5, 3, 9]));
        feed.add_content(movies(&[7, 1]));
        let ids: Vec<u32> = feed.finalize().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 3, 9, 7, 1]);
    }

    #[test]
    fn test_equal_weights_keep_insertion_order() {
        let equal = RecommenderConfig {
            content_weight: 0.5,
            trending_weight: 0.5,
            ..Default::default()
        };
        let mut feed = RankedFeed::new([], &equal);
        feed.add_content(movies(&[1]));
        feed.add_trending(movies(&[2]));
        feed.add_content(movies(&[3]));
        let ids: Vec<u32> = feed.finalize().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_len_counts_accepted_only() {
        let mut feed = RankedFeed::new([1], &config());
        assert!(feed.is_empty());
        feed.add_content(movies(&[1, 2, 2, 3]));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_empty_feed_finalizes_empty() {
        let feed = RankedFeed::new([1, 2, 3], &config());
        assert!(feed.finalize().is_empty());
    }
}
