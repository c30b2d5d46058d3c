//! Error types
//!
//! Every fallible operation in the crate returns [`SummarizeError`]. A call
//! either yields a complete summary or one of these errors; partial results
//! are never returned.

use thiserror::Error;

/// Failure reported by a [`TextProcessor`](crate::nlp::tokenizer::TextProcessor).
///
/// The built-in tokenizer never fails; custom processors use this to surface
/// their own errors. The message is propagated unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tokenization failed: {message}")]
pub struct TokenizationError {
    pub message: String,
}

impl TokenizationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by the summarization entry points.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The input was empty or contained only whitespace.
    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    /// The text processor failed. Not retried.
    #[error(transparent)]
    Tokenization(#[from] TokenizationError),

    /// A configuration value is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A JSON configuration could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SummarizeError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization_error_is_transparent() {
        let err: SummarizeError = TokenizationError::new("bad utf-16 surrogate").into();
        assert_eq!(err.to_string(), "tokenization failed: bad utf-16 surrogate");
        assert!(matches!(err, SummarizeError::Tokenization(_)));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = SummarizeError::invalid_config("damping", "must be within [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid config field `damping`: must be within [0, 1], got 1.5"
        );
    }
}
