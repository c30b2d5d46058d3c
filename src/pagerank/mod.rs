//! Sentence ranking
//!
//! This module provides the damped fixed-iteration ranking used to score
//! sentences on the similarity graph.

pub mod standard;

/// Result of a ranking run
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by sentence position)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// L1 change between the last two iterations
    pub delta: f64,
}

impl PageRankResult {
    /// Create a new result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }
}
