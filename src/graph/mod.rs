//! Graph construction and representation
//!
//! This module builds the sentence similarity matrix and the thresholded
//! graph the ranker iterates over.

pub mod csr;
pub mod similarity;
