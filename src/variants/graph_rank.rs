//! Graph-based sentence scoring
//!
//! Builds the Jaccard similarity matrix, keeps edges above the threshold and
//! ranks sentences with [`SentenceRank`].

use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::pagerank::standard::SentenceRank;
use crate::pipeline::artifacts::{Document, ScoreVector};
use crate::pipeline::traits::SentenceScorer;
use crate::types::SummarizerConfig;

/// TextRank over the sentence similarity graph
#[derive(Debug, Clone)]
pub struct GraphRankScorer {
    /// Similarity an edge must exceed (0.3)
    pub similarity_threshold: f64,
    /// Damping factor (0.85)
    pub damping: f64,
    /// Iterations (50)
    pub iterations: usize,
    /// Sentence count at which the matrix is built in parallel
    pub parallel_threshold: usize,
}

impl Default for GraphRankScorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl GraphRankScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            similarity_threshold: config.similarity_threshold,
            damping: config.damping,
            iterations: config.iterations,
            parallel_threshold: config.parallel_threshold,
        }
    }
}

impl SentenceScorer for GraphRankScorer {
    fn name(&self) -> &'static str {
        "graph_rank"
    }

    fn score(&self, document: &Document) -> ScoreVector {
        let matrix = SimilarityMatrix::build_parallel(document.sentences(), self.parallel_threshold);
        let graph = CsrGraph::from_matrix(&matrix, self.similarity_threshold);

        let result = SentenceRank::new()
            .with_damping(self.damping)
            .with_iterations(self.iterations)
            .run(&graph);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = graph.num_nodes,
            edges = graph.num_edges() / 2,
            isolated = graph.isolated_nodes().len(),
            iterations = result.iterations,
            delta = result.delta,
            "ranked sentence graph"
        );

        ScoreVector::new(result.scores)
    }
}
