//! Stopword filtering
//!
//! The default filter uses a compact English list of function words. Fuller
//! per-language lists come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Compact English list used by the default tokenizer
const CLASSIC_ENGLISH: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "by", "about", "in",
    "of", "with", "this", "that", "these", "those", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "can", "could", "will", "would", "shall",
    "should", "may", "might", "must", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "who", "whom", "which", "what", "whose",
];

fn language_of(language: &str) -> Option<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        _ => return None,
    };
    Some(lang)
}

/// A set of lowercase stopwords
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::classic()
    }
}

impl StopwordFilter {
    /// The built-in compact English list
    pub fn classic() -> Self {
        Self::from_list(CLASSIC_ENGLISH)
    }

    /// Full stopword list for a language from the `stop-words` crate
    ///
    /// Accepts ISO 639-1 codes and English language names; `None` when the
    /// language has no list.
    pub fn for_language(language: &str) -> Option<Self> {
        let lang = language_of(language)?;
        Some(Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// Whether [`StopwordFilter::for_language`] has a list for `language`
    pub fn supports_language(language: &str) -> bool {
        language_of(language).is_some()
    }

    /// Filter with no stopwords
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Filter from a custom list (lowercased)
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter
    pub fn extend(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check a token. Tokens are expected to be lowercase already.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_list() {
        let filter = StopwordFilter::default();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("whose"));
        assert!(filter.is_stopword("it"));
        assert!(!filter.is_stopword("market"));
        // Not in the compact list
        assert!(!filter.is_stopword("not"));
        assert_eq!(filter.len(), CLASSIC_ENGLISH.len());
    }

    #[test]
    fn test_language_list() {
        let german = StopwordFilter::for_language("de").unwrap();
        assert!(german.is_stopword("und"));
        assert!(german.is_stopword("die"));
        assert!(!german.is_stopword("maschine"));

        let english = StopwordFilter::for_language("English").unwrap();
        assert!(english.is_stopword("the"));
        assert!(english.len() > CLASSIC_ENGLISH.len());
    }

    #[test]
    fn test_unknown_language_has_no_list() {
        assert!(StopwordFilter::for_language("klingon").is_none());
        assert!(!StopwordFilter::supports_language("klingon"));
        assert!(StopwordFilter::supports_language("FR"));
        assert!(StopwordFilter::supports_language("en"));
    }

    #[test]
    fn test_custom_and_extend() {
        let mut filter = StopwordFilter::from_list(&["Foo"]);
        assert!(filter.is_stopword("foo"));
        assert!(!filter.is_stopword("bar"));

        filter.extend(&["BAR"]);
        assert!(filter.is_stopword("bar"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
