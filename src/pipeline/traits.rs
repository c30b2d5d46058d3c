//! Stage trait definitions for the pipeline.
//!
//! Scoring is the one pluggable stage: anything that maps a [`Document`] to
//! one score per sentence can drive the selector. Implementations are
//! statically dispatched by the runner; trait objects work too.

use crate::pipeline::artifacts::{Document, ScoreVector};

/// Scores every sentence of a document.
///
/// # Contract
///
/// - **Input**: a [`Document`] with at least one sentence.
/// - **Output**: a [`ScoreVector`] with exactly `document.len()` entries,
///   indexed by sentence position. Higher is more important.
/// - **Pure**: identical documents yield identical scores.
pub trait SentenceScorer {
    /// Short name used in logs and stage reports.
    fn name(&self) -> &'static str;

    /// Whether the scorer reads [`Document::frequencies`]. The runner only
    /// builds the document-wide table when this returns `true`.
    fn needs_word_frequencies(&self) -> bool {
        false
    }

    /// Score the document's sentences.
    fn score(&self, document: &Document) -> ScoreVector;
}

impl<S: SentenceScorer + ?Sized> SentenceScorer for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn needs_word_frequencies(&self) -> bool {
        (**self).needs_word_frequencies()
    }

    fn score(&self, document: &Document) -> ScoreVector {
        (**self).score(document)
    }
}

impl<S: SentenceScorer + ?Sized> SentenceScorer for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn needs_word_frequencies(&self) -> bool {
        (**self).needs_word_frequencies()
    }

    fn score(&self, document: &Document) -> ScoreVector {
        (**self).score(document)
    }
}
