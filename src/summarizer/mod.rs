//! Summarization components
//!
//! Provides top-K sentence selection that reassembles the chosen sentences
//! in document order.

pub mod selector;
