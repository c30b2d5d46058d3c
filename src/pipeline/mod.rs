//! Summarization pipeline
//!
//! Stage traits, per-call artifacts, observers and the runner that threads
//! one call through extraction, scoring and selection.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
