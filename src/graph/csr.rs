//! Compressed Sparse Row (CSR) sentence graph
//!
//! Only edges whose similarity exceeds the threshold are stored, so the
//! ranking loop touches qualifying edges and nothing else.

use super::similarity::SimilarityMatrix;

/// Thresholded sentence graph in CSR form
///
/// Node i's edges are at `row_ptr[i]..row_ptr[i+1]`. Self-edges are never
/// stored; the diagonal only contributes to `outbound_sum`.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences)
    pub num_nodes: usize,
    /// Row pointers into `col_idx` / `weights`
    pub row_ptr: Vec<usize>,
    /// Target node of each edge
    pub col_idx: Vec<u32>,
    /// Similarity of each edge
    pub weights: Vec<f64>,
    /// Sum of every above-threshold similarity in the node's row, diagonal included
    pub outbound_sum: Vec<f64>,
}

impl CsrGraph {
    /// Keep every cell of `matrix` strictly greater than `threshold`
    pub fn from_matrix(matrix: &SimilarityMatrix, threshold: f64) -> Self {
        let num_nodes = matrix.size();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut outbound_sum = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes {
            let mut sum = 0.0;
            for (target, &similarity) in matrix.row(node).iter().enumerate() {
                if similarity <= threshold {
                    continue;
                }
                sum += similarity;
                if target != node {
                    col_idx.push(target as u32);
                    weights.push(similarity);
                }
            }
            outbound_sum.push(sum);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            outbound_sum,
        }
    }

    /// Iterate over neighbors of a node in ascending order
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Number of qualifying edges leaving a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Outbound similarity sum of a node
    pub fn node_outbound_sum(&self, node: u32) -> f64 {
        self.outbound_sum[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total stored edges (each undirected pair counted twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no qualifying edges to other sentences
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            outbound_sum: Vec::new(),
        }
    }
}
