//! Pipeline runner: drives one summarization call through its stages.
//!
//! A call moves through `Idle -> SentencesExtracted -> Scored -> Selected`:
//!
//! 1. Extract: split and tokenize into a [`Document`] (fails fast on blank
//!    input)
//! 2. Frequencies: build the document-wide word table, only for scorers that
//!    ask for it
//! 3. Score: run a [`SentenceScorer`]
//! 4. Select: keep the top sentences in document order
//!
//! Documents no longer than the summary length skip steps 2 and 3 and are
//! returned whole. Each call starts from scratch; the runner holds only
//! immutable configuration.

use crate::errors::Result;
use crate::nlp::tokenizer::{TextProcessor, Tokenizer};
use crate::pipeline::artifacts::{Document, Summary};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_EXTRACT, STAGE_FREQUENCIES,
    STAGE_SCORE, STAGE_SELECT,
};
use crate::pipeline::traits::SentenceScorer;
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::types::{Strategy, SummarizerConfig};
use crate::variants::scorer_for;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Extractive summarizer facade.
///
/// Generic over the [`TextProcessor`] so a different sentence splitter or
/// tokenizer can be plugged in; defaults to the built-in [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct Summarizer<P = Tokenizer> {
    config: SummarizerConfig,
    processor: P,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Summarizer with the default configuration
    pub fn new() -> Self {
        let config = SummarizerConfig::default();
        Self {
            processor: Tokenizer::from_config(&config),
            selector: selector_for(&config),
            config,
        }
    }

    /// Summarizer with a validated custom configuration
    pub fn from_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            processor: Tokenizer::from_config(&config),
            selector: selector_for(&config),
            config,
        })
    }
}

fn selector_for(config: &SummarizerConfig) -> SentenceSelector {
    SentenceSelector::with_config(SelectorConfig {
        num_sentences: config.max_sentences,
    })
}

impl<P: TextProcessor> Summarizer<P> {
    /// Replace the text processor
    pub fn with_processor<Q: TextProcessor>(self, processor: Q) -> Summarizer<Q> {
        Summarizer {
            config: self.config,
            processor,
            selector: self.selector,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize with the graph-ranking strategy
    pub fn summarize_by_graph_rank(&self, text: &str) -> Result<String> {
        self.summarize(text, Strategy::GraphRank)
    }

    /// Summarize with the word-frequency strategy
    pub fn summarize_by_frequency(&self, text: &str) -> Result<String> {
        self.summarize(text, Strategy::Frequency)
    }

    /// Summarize with a built-in strategy, returning the summary text
    pub fn summarize(&self, text: &str, strategy: Strategy) -> Result<String> {
        self.summarize_detailed(text, strategy).map(|s| s.text)
    }

    /// Summarize with a built-in strategy, returning positions and metadata
    pub fn summarize_detailed(&self, text: &str, strategy: Strategy) -> Result<Summary> {
        let scorer = scorer_for(strategy, &self.config);
        self.summarize_with(text, &scorer, &mut NoopObserver)
    }

    /// Summarize with any scorer, reporting stage boundaries to `observer`
    pub fn summarize_with(
        &self,
        text: &str,
        scorer: &impl SentenceScorer,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        // Extract
        trace_stage!(STAGE_EXTRACT);
        observer.on_stage_start(STAGE_EXTRACT);
        let clock = StageClock::start();
        let mut document = Document::extract(text, &self.processor)?;
        let report = StageReport::new(clock.elapsed()).with_sentences(document.len());
        observer.on_stage_end(STAGE_EXTRACT, &report);

        #[cfg(feature = "tracing")]
        tracing::debug!(sentences = document.len(), "extracted sentences");

        if self.selector.returns_all(document.len()) {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selection = self.selector.select_all(document.sentences());
            let report =
                StageReport::new(clock.elapsed()).with_sentences(selection.positions.len());
            observer.on_stage_end(STAGE_SELECT, &report);

            return Ok(Summary {
                text: selection.text,
                positions: selection.positions,
                sentence_count: document.len(),
                scorer: None,
            });
        }

        // Frequencies
        if scorer.needs_word_frequencies() {
            trace_stage!(STAGE_FREQUENCIES);
            observer.on_stage_start(STAGE_FREQUENCIES);
            let clock = StageClock::start();
            document = document.with_word_frequencies(text, &self.processor)?;
            let report = StageReport::new(clock.elapsed()).with_sentences(document.len());
            observer.on_stage_end(STAGE_FREQUENCIES, &report);
        }

        // Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scores = scorer.score(&document);
        debug_assert_eq!(scores.len(), document.len());
        let report = StageReport::new(clock.elapsed())
            .with_sentences(scores.len())
            .with_scorer(scorer.name());
        observer.on_stage_end(STAGE_SCORE, &report);

        // Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = self.selector.select(document.sentences(), &scores);
        let report = StageReport::new(clock.elapsed()).with_sentences(selection.positions.len());
        observer.on_stage_end(STAGE_SELECT, &report);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            scorer = scorer.name(),
            selected = ?selection.positions,
            total = document.len(),
            "selected summary sentences"
        );

        Ok(Summary {
            text: selection.text,
            positions: selection.positions,
            sentence_count: document.len(),
            scorer: Some(scorer.name()),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
