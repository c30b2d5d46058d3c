//! Top-K sentence selection for summarization
//!
//! Picks the highest-scoring sentences and emits them in document order, so
//! the summary reads the way the source does even though selection is by
//! importance.

use crate::pipeline::artifacts::{join_sentences, ScoreVector};
use crate::types::Sentence;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Maximum number of sentences to select
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { num_sentences: 3 }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Original positions of the selected sentences, ascending
    pub positions: Vec<usize>,
}

/// Sentence text, score and position; only lives for the sort
#[derive(Debug, Clone, Copy)]
struct ScoredSentence<'a> {
    sentence: &'a Sentence,
    score: f64,
}

/// Top-K sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    pub fn num_sentences(&self) -> usize {
        self.config.num_sentences
    }

    /// Whether a document of `sentence_count` sentences is returned whole
    pub fn returns_all(&self, sentence_count: usize) -> bool {
        sentence_count <= self.config.num_sentences
    }

    /// Every sentence in original order; used when ranking is skipped
    pub fn select_all(&self, sentences: &[Sentence]) -> Selection {
        Selection {
            text: join_sentences(sentences.iter()),
            positions: sentences.iter().map(|s| s.index).collect(),
        }
    }

    /// Select the top sentences by score
    ///
    /// Ties keep encounter order. `scores` must have one entry per sentence.
    pub fn select(&self, sentences: &[Sentence], scores: &ScoreVector) -> Selection {
        debug_assert_eq!(sentences.len(), scores.len());

        if self.returns_all(sentences.len()) {
            return self.select_all(sentences);
        }

        let mut scored: Vec<ScoredSentence<'_>> = sentences
            .iter()
            .zip(scores.as_slice())
            .map(|(sentence, &score)| ScoredSentence { sentence, score })
            .collect();

        // Stable sort: equal scores stay in document order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.config.num_sentences);

        scored.sort_by_key(|s| s.sentence.index);

        Selection {
            text: join_sentences(scored.iter().map(|s| s.sentence)),
            positions: scored.iter().map(|s| s.sentence.index).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(n: usize) -> Vec<Sentence> {
        (0..n)
            .map(|i| Sentence::new(format!("Sentence number {i}."), i, vec![]))
            .collect()
    }

    #[test]
    fn test_top_k_in_document_order() {
        let sentences = make_sentences(5);
        let scores = ScoreVector::new(vec![0.1, 0.9, 0.3, 0.8, 0.7]);

        let selection = SentenceSelector::new().select(&sentences, &scores);

        assert_eq!(selection.positions, vec![1, 3, 4]);
        assert_eq!(
            selection.text,
            "Sentence number 1. Sentence number 3. Sentence number 4."
        );
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let sentences = make_sentences(6);
        let scores = ScoreVector::new(vec![0.5, 0.2, 0.5, 0.5, 0.5, 0.2]);

        let selection = SentenceSelector::new().select(&sentences, &scores);
        assert_eq!(selection.positions, vec![0, 2, 3]);
    }

    #[test]
    fn test_short_document_returned_whole() {
        let sentences = make_sentences(2);
        // Scores are ignored when every sentence fits
        let scores = ScoreVector::new(vec![0.0, 5.0]);

        let selection = SentenceSelector::new().select(&sentences, &scores);
        assert_eq!(selection.positions, vec![0, 1]);
        assert_eq!(selection.text, "Sentence number 0. Sentence number 1.");

        let selector = SentenceSelector::new().with_num_sentences(2);
        assert!(selector.returns_all(2));
        assert!(!selector.returns_all(3));
    }

    #[test]
    fn test_num_sentences() {
        let sentences = make_sentences(10);
        let scores = ScoreVector::new((0..10).map(|i| i as f64).collect());

        let selection = SentenceSelector::with_config(SelectorConfig { num_sentences: 4 })
            .select(&sentences, &scores);
        assert_eq!(selection.positions, vec![6, 7, 8, 9]);

        let selection = SentenceSelector::new()
            .with_num_sentences(1)
            .select(&sentences, &scores);
        assert_eq!(selection.text, "Sentence number 9.");
    }

    #[test]
    fn test_output_always_ascending() {
        let sentences = make_sentences(8);
        let scores = ScoreVector::new(vec![0.3, 0.1, 0.9, 0.2, 0.95, 0.4, 0.05, 0.99]);

        let selection = SentenceSelector::new().select(&sentences, &scores);
        assert!(selection.positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(selection.positions, vec![2, 4, 7]);
    }

    #[test]
    fn test_empty_input() {
        let selection = SentenceSelector::new().select(&[], &ScoreVector::new(vec![]));
        assert!(selection.positions.is_empty());
        assert_eq!(selection.text, "");
    }
}
