//! Natural Language Processing components
//!
//! This module provides sentence splitting, tokenization and stopword
//! filtering.

pub mod stopwords;
pub mod tokenizer;
