//! Stop-word filtering for term extraction.
//!
//! A `Stopwords` set combines an optional built-in list with user supplied words. The
//! built-in English list comes from the `stop-words` crate (Stopwords ISO).

use std::collections::HashSet;

use cvmatch_config::StopwordSet;
use stop_words::LANGUAGE;

/// A case-insensitive stop-word filter.
///
/// Words are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    /// Lowercased stop-words.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates an empty filter that keeps every word.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a filter with the English stop-word list.
    pub fn english() -> Self {
        Self::none().with_words(stop_words::get(LANGUAGE::English))
    }

    /// Creates a filter from a built-in set plus extra words.
    pub fn from_settings(set: StopwordSet, extra: &[String]) -> Self {
        let base = match set {
            StopwordSet::None => Self::none(),
            StopwordSet::English => Self::english(),
        };
        base.with_words(extra)
    }

    /// Adds words to the filter.
    pub fn with_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.words.extend(
            words
                .iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Checks if a word is a stop-word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the number of stop-words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the filter keeps every word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
