//! Damped sentence ranking
//!
//! Power iteration over the thresholded similarity graph:
//!
//! `score'(i) = (1 - d) + d * sum_j sim(j, i) * score(j) / outbound(j)`
//!
//! The recurrence always runs the full iteration count. Scores are not
//! normalized, so an isolated sentence settles at exactly `1 - d`.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Fixed-iteration damped ranking
#[derive(Debug, Clone)]
pub struct SentenceRank {
    /// Damping factor (0.85)
    pub damping: f64,
    /// Number of iterations, always run in full (50)
    pub iterations: usize,
}

impl Default for SentenceRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 50,
        }
    }
}

impl SentenceRank {
    /// Create a new SentenceRank with default settings
    pub fn new() -> Self {
        Self::default()
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

    /// Run the ranking on a graph
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut incoming = vec![0.0; n];
        let mut delta = 0.0;

        for _ in 0..self.iterations {
            incoming.fill(0.0);

            // Push from each source j; every target i still receives its
            // contributions in ascending j order.
            for (node, &node_score) in scores.iter().enumerate() {
                let outbound = graph.node_outbound_sum(node as u32);
                if outbound <= 0.0 {
                    continue;
                }
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    incoming[neighbor as usize] += weight * node_score / outbound;
                }
            }

            delta = 0.0;
            for (score, &sum) in scores.iter_mut().zip(incoming.iter()) {
                let updated = (1.0 - self.damping) + self.damping * sum;
                delta += (updated - *score).abs();
                *score = updated;
            }
        }

        PageRankResult::new(scores, self.iterations, delta)
    }
}
