//! Frequency-based sentence scoring
//!
//! A sentence scores the mean document-wide frequency of its tokens. Dividing
//! by token count keeps long sentences from winning on length alone.

use crate::pipeline::artifacts::{Document, ScoreVector, WordFrequencies};
use crate::pipeline::traits::SentenceScorer;
use crate::types::Sentence;

/// Mean global word frequency per sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl FrequencyScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a single sentence. A sentence with no tokens scores 0.
    pub fn score_sentence(sentence: &Sentence, frequencies: &WordFrequencies) -> f64 {
        if sentence.is_empty() {
            return 0.0;
        }
        let total: f64 = sentence
            .tokens
            .iter()
            .map(|t| frequencies.get(t) as f64)
            .sum();
        total / sentence.token_count() as f64
    }
}

impl SentenceScorer for FrequencyScorer {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn needs_word_frequencies(&self) -> bool {
        true
    }

    fn score(&self, document: &Document) -> ScoreVector {
        let fallback;
        let frequencies = match document.frequencies() {
            Some(frequencies) => frequencies,
            None => {
                fallback = WordFrequencies::from_sentences(document.sentences());
                &fallback
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = document.len(),
            vocabulary = frequencies.len(),
            "scoring sentences by word frequency"
        );

        ScoreVector::new(
            document
                .sentences()
                .iter()
                .map(|s| Self::score_sentence(s, frequencies))
                .collect(),
        )
    }
}
