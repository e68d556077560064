//! Hybrid recommendation pipeline.
//!
//! Watch history supplies the signal: recently finished or nearly finished
//! movies seed parallel similar-title lookups, the results are deduplicated
//! and weighted, and the trending pool tops up thin feeds. The facade in
//! [`RecommendationEngine`] is the single entry point and never fails.

mod config;
mod engine;
mod interest;
mod ranker;

pub use config::RecommenderConfig;
pub use engine::RecommendationEngine;
pub use interest::high_interest;
pub use ranker::{Candidate, CandidateSource, RankedFeed};
