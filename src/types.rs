//! Core data types shared across the summarizer
//!
//! [`Sentence`] is the unit every stage works on; [`SummarizerConfig`] holds
//! the engine constants and their overrides.

use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A sentence of the input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Raw sentence text (trimmed, otherwise verbatim)
    pub text: String,
    /// Zero-based position in the document
    pub index: usize,
    /// Cleaned tokens with stopwords and short tokens removed, in order
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, tokens: Vec<String>) -> Self {
        Self {
            text: text.into(),
            index,
            tokens,
        }
    }

    /// Distinct tokens of the sentence
    pub fn token_set(&self) -> FxHashSet<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }

    /// Number of tokens (with repeats)
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether cleaning left no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Sentence scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Jaccard similarity graph ranked with damped iteration
    GraphRank,
    /// Mean global word frequency per sentence
    Frequency,
}

impl Strategy {
    /// Returns the user-facing name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GraphRank => "graph_rank",
            Self::Frequency => "frequency",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "graph_rank" | "graphrank" | "graph" | "textrank" => Some(Strategy::GraphRank),
            "frequency" | "freq" | "word_frequency" => Some(Strategy::Frequency),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Strategy::parse(value).ok_or_else(|| {
            SummarizeError::invalid_config("strategy", format!("unknown strategy '{value}'"))
        })
    }
}

/// Configuration for summarization
///
/// Defaults reproduce the reference behavior: 3 sentences, damping 0.85,
/// 50 iterations, edge threshold 0.3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Maximum number of sentences in the summary
    pub max_sentences: usize,
    /// Damping factor for the ranking recurrence
    pub damping: f64,
    /// Number of ranking iterations (always run in full)
    pub iterations: usize,
    /// Similarity an edge must exceed to count in the ranking
    pub similarity_threshold: f64,
    /// Minimum token length in characters
    pub min_token_length: usize,
    /// Stopword language; `None` selects the built-in English list
    pub stopword_language: Option<String>,
    /// Sentence count at which similarity rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: 3,
            damping: 0.85,
            iterations: 50,
            similarity_threshold: 0.3,
            min_token_length: 2,
            stopword_language: None,
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config and validate it
    ///
    /// Omitted fields take their defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum summary length
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the edge threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the minimum token length
    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    /// Use the `stop-words` list for the given language
    pub fn with_stopword_language(mut self, language: impl Into<String>) -> Self {
        self.stopword_language = Some(language.into());
        self
    }

    /// Set the parallel similarity threshold
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<()> {
        if self.max_sentences == 0 {
            return Err(SummarizeError::invalid_config(
                "max_sentences",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(
                "damping",
                format!("must be within [0, 1], got {}", self.damping),
            ));
        }
        if self.iterations == 0 {
            return Err(SummarizeError::invalid_config(
                "iterations",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(SummarizeError::invalid_config(
                "similarity_threshold",
                format!("must be within [0, 1], got {}", self.similarity_threshold),
            ));
        }
        if self.min_token_length == 0 {
            return Err(SummarizeError::invalid_config(
                "min_token_length",
                "must be at least 1",
            ));
        }
        if let Some(language) = &self.stopword_language {
            if !StopwordFilter::supports_language(language) {
                return Err(SummarizeError::invalid_config(
                    "stopword_language",
                    format!("no stopword list for '{language}'"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_constants() {
        let config = SummarizerConfig::default();
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.iterations, 50);
        assert_eq!(config.similarity_threshold, 0.3);
        assert_eq!(config.min_token_length, 2);
        assert!(config.stopword_language.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = SummarizerConfig::from_json(r#"{ "max_sentences": 2 }"#).unwrap();
        assert_eq!(config.max_sentences, 2);
        assert_eq!(config.iterations, 50);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = SummarizerConfig::from_json(r#"{ "max_sentence": 2 }"#).unwrap_err();
        assert!(matches!(err, SummarizeError::ConfigParse(_)));
    }

    #[test]
    fn test_from_json_runs_validation() {
        let err = SummarizerConfig::from_json(r#"{ "damping": 1.2 }"#).unwrap_err();
        assert!(matches!(
            err,
            SummarizeError::InvalidConfig { field: "damping", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let cases = [
            (SummarizerConfig::new().with_max_sentences(0), "max_sentences"),
            (SummarizerConfig::new().with_iterations(0), "iterations"),
            (SummarizerConfig::new().with_min_token_length(0), "min_token_length"),
            (
                SummarizerConfig::new().with_similarity_threshold(-0.1),
                "similarity_threshold",
            ),
            (
                SummarizerConfig::new().with_stopword_language("klingon"),
                "stopword_language",
            ),
        ];
        for (config, expected) in cases {
            match config.validate() {
                Err(SummarizeError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidConfig for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_accepts_known_languages() {
        for language in ["de", "French", "en"] {
            let config = SummarizerConfig::new().with_stopword_language(language);
            assert!(config.validate().is_ok(), "{language} rejected");
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SummarizerConfig::new()
            .with_max_sentences(5)
            .with_stopword_language("de");
        let json = serde_json::to_string(&config).unwrap();
        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("textrank".parse::<Strategy>().unwrap(), Strategy::GraphRank);
        assert_eq!("Graph_Rank".parse::<Strategy>().unwrap(), Strategy::GraphRank);
        assert_eq!("freq".parse::<Strategy>().unwrap(), Strategy::Frequency);
        assert!("lexrank".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Frequency.to_string(), "frequency");
    }

    #[test]
    fn test_sentence_token_set_dedups() {
        let sentence = Sentence::new(
            "Markets rallied and markets closed.",
            0,
            vec!["markets".into(), "rallied".into(), "markets".into(), "closed".into()],
        );
        assert_eq!(sentence.token_count(), 4);
        assert_eq!(sentence.token_set().len(), 3);
        assert!(!sentence.is_empty());
    }
}
