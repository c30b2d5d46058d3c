//! Per-call pipeline artifacts.
//!
//! Each type is an intermediate result flowing between stages. All of them
//! are created fresh by one summarization call and dropped when it returns;
//! nothing is cached across calls.

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::TextProcessor;
use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// Document-wide token counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencies {
    counts: FxHashMap<String, usize>,
}

impl WordFrequencies {
    pub fn new(counts: FxHashMap<String, usize>) -> Self {
        Self { counts }
    }

    /// Count the tokens of already-tokenized sentences.
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut counts = FxHashMap::default();
        for token in sentences.iter().flat_map(|s| s.tokens.iter()) {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `token`, 0 when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// A document split into sentences, with each sentence's tokens computed once.
///
/// This is the `SentencesExtracted` state: building one requires non-empty
/// input that splits into at least one sentence.
#[derive(Debug, Clone)]
pub struct Document {
    sentences: Vec<Sentence>,
    frequencies: Option<WordFrequencies>,
}

impl Document {
    /// Split and tokenize `text`.
    ///
    /// Fails with [`SummarizeError::EmptyInput`] on blank input and passes
    /// processor errors through unchanged.
    pub fn extract(text: &str, processor: &impl TextProcessor) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let raw = processor.split_sentences(text)?;
        if raw.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let sentences = raw
            .into_iter()
            .enumerate()
            .map(|(index, text)| -> Result<Sentence> {
                let tokens = processor.tokens_of(&text)?;
                Ok(Sentence::new(text, index, tokens))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            sentences,
            frequencies: None,
        })
    }

    /// Build from sentences that are already tokenized.
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        Self {
            sentences,
            frequencies: None,
        }
    }

    /// Attach document-wide frequencies computed from the whole cleaned text.
    pub fn with_word_frequencies(
        mut self,
        text: &str,
        processor: &impl TextProcessor,
    ) -> Result<Self> {
        let tokens = processor.tokens_of(text)?;
        self.frequencies = Some(WordFrequencies::new(processor.frequencies(&tokens)));
        Ok(self)
    }

    /// Attach a precomputed frequency table.
    pub fn with_frequencies(mut self, frequencies: WordFrequencies) -> Self {
        self.frequencies = Some(frequencies);
        self
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn frequencies(&self) -> Option<&WordFrequencies> {
        self.frequencies.as_ref()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All sentences joined in document order.
    pub fn full_text(&self) -> String {
        join_sentences(self.sentences.iter())
    }
}

/// One score per sentence, indexed by sentence position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    scores: Vec<f64>,
}

impl ScoreVector {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.scores[index]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Final summarization output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Selected sentences joined by single spaces, in document order
    pub text: String,
    /// Original positions of the selected sentences, ascending
    pub positions: Vec<usize>,
    /// Number of sentences in the input document
    pub sentence_count: usize,
    /// Name of the scorer that ranked the sentences, `None` when the
    /// document was short enough to be returned whole
    pub scorer: Option<&'static str>,
}

pub(crate) fn join_sentences<'a>(sentences: impl Iterator<Item = &'a Sentence>) -> String {
    sentences
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
