//! Sentence scoring variants
//!
//! This module provides the two built-in [`SentenceScorer`] implementations:
//! - GraphRankScorer: TextRank over a Jaccard sentence-similarity graph
//! - FrequencyScorer: mean document-wide frequency of a sentence's words

pub mod frequency;
pub mod graph_rank;

pub use frequency::FrequencyScorer;
pub use graph_rank::GraphRankScorer;

use crate::pipeline::traits::SentenceScorer;
use crate::types::{Strategy, SummarizerConfig};

/// Build the scorer for a strategy
pub fn scorer_for(strategy: Strategy, config: &SummarizerConfig) -> Box<dyn SentenceScorer> {
    match strategy {
        Strategy::GraphRank => Box::new(GraphRankScorer::from_config(config)),
        Strategy::Frequency => Box::new(FrequencyScorer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_for_strategy() {
        let config = SummarizerConfig::default();
        assert_eq!(scorer_for(Strategy::GraphRank, &config).name(), "graph_rank");

        let frequency = scorer_for(Strategy::Frequency, &config);
        assert_eq!(frequency.name(), "frequency");
        assert!(frequency.needs_word_frequencies());
    }
}
