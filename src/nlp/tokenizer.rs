//! Sentence splitting and word tokenization
//!
//! [`TextProcessor`] is the boundary between the summarizer and whatever
//! splits and normalizes text. [`Tokenizer`] is the built-in implementation:
//! UAX #29 sentence boundaries (rejoined after common abbreviations and
//! initials), lowercase alphanumeric words, stopwords and short tokens
//! removed.
//!
//! Similarity and frequency scoring both go through the same processor, so
//! a token means the same thing on both paths.

use super::stopwords::StopwordFilter;
use crate::errors::TokenizationError;
use crate::types::SummarizerConfig;
use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period without ending the sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "e.g", "i.e", "jr", "sr",
];

/// Whether `segment` ends in a known abbreviation or a single-letter initial
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(head) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    let word = head
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(initial), None) = (chars.next(), chars.next()) {
        return initial.is_uppercase();
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Splits text into sentences and normalized tokens
///
/// Implementations must be deterministic: identical input gives identical
/// output.
pub trait TextProcessor {
    /// Split raw text into trimmed, non-empty sentences in document order
    fn split_sentences(&self, text: &str) -> Result<Vec<String>, TokenizationError>;

    /// Lowercase, replace punctuation with spaces, collapse whitespace
    fn clean(&self, text: &str) -> String;

    /// Split cleaned text into tokens, dropping stopwords and short tokens
    fn tokenize(&self, cleaned: &str) -> Result<Vec<String>, TokenizationError>;

    /// Count token occurrences
    fn frequencies(&self, tokens: &[String]) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Clean then tokenize
    fn tokens_of(&self, text: &str) -> Result<Vec<String>, TokenizationError> {
        self.tokenize(&self.clean(text))
    }
}

/// Built-in Unicode-aware text processor
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
    /// Minimum token length in characters
    min_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Tokenizer with the classic English stopword list, minimum length 2
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::classic(),
            min_length: 2,
        }
    }

    /// Build from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let stopwords = config
            .stopword_language
            .as_deref()
            .and_then(StopwordFilter::for_language)
            .unwrap_or_default();
        Self {
            stopwords,
            min_length: config.min_token_length,
        }
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl TextProcessor for Tokenizer {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>, TokenizationError> {
        let mut sentences = Vec::new();
        let mut pending = String::new();

        for segment in text.split_sentence_bounds() {
            pending.push_str(segment);
            if ends_with_abbreviation(&pending) {
                continue;
            }
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
        push_trimmed(&mut sentences, &pending);

        Ok(sentences)
    }

    fn clean(&self, text: &str) -> String {
        let replaced: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
            .collect();
        replaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn tokenize(&self, cleaned: &str) -> Result<Vec<String>, TokenizationError> {
        Ok(cleaned
            .split_whitespace()
            .map(str::to_lowercase)
            .filter(|t| t.chars().count() >= self.min_length)
            .filter(|t| !self.stopwords.is_stopword(t))
            .collect())
    }
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
