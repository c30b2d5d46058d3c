//! Sentence similarity matrix
//!
//! Cell (i, j) holds the Jaccard similarity of the token sets of sentences
//! i and j. The diagonal is fixed at 1.0.

use crate::types::Sentence;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Jaccard similarity of two token sets
///
/// Returns 0.0 when both sets are empty.
pub fn jaccard(a: &FxHashSet<&str>, b: &FxHashSet<&str>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Dense N x N similarity matrix, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix sequentially
    pub fn build(sentences: &[Sentence]) -> Self {
        let sets: Vec<_> = sentences.iter().map(Sentence::token_set).collect();
        let size = sets.len();

        let values = (0..size)
            .flat_map(|i| {
                let sets = &sets;
                (0..size).map(move |j| Self::cell(sets, i, j))
            })
            .collect();

        Self { size, values }
    }

    /// Build the matrix, computing rows in parallel at or above
    /// `parallel_threshold` sentences
    ///
    /// Produces exactly the same matrix as [`SimilarityMatrix::build`].
    pub fn build_parallel(sentences: &[Sentence], parallel_threshold: usize) -> Self {
        if sentences.len() < parallel_threshold {
            return Self::build(sentences);
        }

        let sets: Vec<_> = sentences.iter().map(Sentence::token_set).collect();
        let size = sets.len();

        let rows: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| (0..size).map(|j| Self::cell(&sets, i, j)).collect())
            .collect();

        Self {
            size,
            values: rows.into_iter().flatten().collect(),
        }
    }

    fn cell(sets: &[FxHashSet<&str>], i: usize, j: usize) -> f64 {
        if i == j {
            1.0
        } else {
            jaccard(&sets[i], &sets[j])
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, tokens: &[&str]) -> Sentence {
        Sentence::new(
            tokens.join(" "),
            index,
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn set<'a>(tokens: &[&'a str]) -> FxHashSet<&'a str> {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_jaccard_basic() {
        let a = set(&["machine", "learning", "model"]);
        let b = set(&["machine", "learning", "data", "science"]);
        // 2 shared / 5 total
        assert!((jaccard(&a, &b) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_disjoint_and_empty() {
        assert_eq!(jaccard(&set(&["alpha"]), &set(&["beta"])), 0.0);
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard(&set(&["alpha"]), &set(&[])), 0.0);
    }

    #[test]
    fn test_matrix_symmetric_with_unit_diagonal() {
        let sentences = vec![
            sentence(0, &["rust", "memory", "safety"]),
            sentence(1, &["rust", "compiler", "safety"]),
            sentence(2, &[]),
            sentence(3, &["garbage", "collector"]),
        ];
        let matrix = SimilarityMatrix::build(&sentences);

        assert_eq!(matrix.size(), 4);
        for i in 0..4 {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert!((0.0..=1.0).contains(&matrix.get(i, j)));
            }
        }
        // Empty sentence has unit diagonal but no similarity to anything else
        assert_eq!(matrix.get(2, 0), 0.0);
        assert!((matrix.get(0, 1) - 0.5).abs() < 1e-12);
        assert_eq!(matrix.row(3), &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_repeated_tokens_count_once() {
        let sentences = vec![
            sentence(0, &["rate", "rate", "rate"]),
            sentence(1, &["rate"]),
        ];
        let matrix = SimilarityMatrix::build(&sentences);
        assert_eq!(matrix.get(0, 1), 1.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vocab = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"];
        let sentences: Vec<_> = (0..40)
            .map(|i| {
                let tokens: Vec<&str> = (0..3).map(|k| vocab[(i * (k + 1)) % vocab.len()]).collect();
                sentence(i, &tokens)
            })
            .collect();

        let sequential = SimilarityMatrix::build(&sentences);
        let parallel = SimilarityMatrix::build_parallel(&sentences, 8);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_input() {
        let matrix = SimilarityMatrix::build(&[]);
        assert!(matrix.is_empty());
    }
}
