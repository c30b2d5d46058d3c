//! # rapid-summarizer
//!
//! Extractive summarization: pick the most important sentences of a document
//! and return them verbatim, in document order.
//!
//! Two scoring strategies are provided:
//!
//! - **Graph rank**: sentences are nodes, Jaccard similarity of their token
//!   sets weights the edges, and a damped TextRank iteration scores them.
//! - **Frequency**: a sentence scores the mean document-wide frequency of
//!   its words.
//!
//! ```
//! let text = "Rust guarantees memory safety. The borrow checker enforces strict \
//!             rules. Cargo builds crates. Memory safety guarantees matter in Rust.";
//! let summary = rapid_summarizer::summarize_by_graph_rank(text).unwrap();
//! assert!(summary.starts_with("Rust guarantees memory safety."));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit spans and debug events for each stage.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;
pub mod variants;

pub use errors::{Result, SummarizeError, TokenizationError};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{TextProcessor, Tokenizer};
pub use pipeline::artifacts::Summary;
pub use pipeline::runner::Summarizer;
pub use pipeline::traits::SentenceScorer;
pub use types::{Sentence, Strategy, SummarizerConfig};
pub use variants::{FrequencyScorer, GraphRankScorer};

/// Summarize `text` with the graph-ranking strategy and default settings
pub fn summarize_by_graph_rank(text: &str) -> Result<String> {
    Summarizer::new().summarize_by_graph_rank(text)
}

/// Summarize `text` with the word-frequency strategy and default settings
pub fn summarize_by_frequency(text: &str) -> Result<String> {
    Summarizer::new().summarize_by_frequency(text)
}

/// Summarize `text` with a strategy and configuration
pub fn summarize(text: &str, strategy: Strategy, config: &SummarizerConfig) -> Result<Summary> {
    Summarizer::from_config(config.clone())?.summarize_detailed(text, strategy)
}
