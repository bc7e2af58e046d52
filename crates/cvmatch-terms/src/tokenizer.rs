//! The regex-based term tokenizer.

use std::sync::LazyLock;

use cvmatch_config::DEFAULT_MIN_LENGTH;
use regex::Regex;

use crate::{Stopwords, TermExtractor};

/// Candidate tokens: an ASCII letter followed by letters, digits and joiners.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9/+_.\-]*").expect("valid regex"));

/// Characters trimmed from both ends of a token.
const TRIM_CHARS: &[char] = &['.', '_', '-', '+', '/'];

/// Tokenizer that needs no linguistic model.
///
/// Tokens keep their internal joiners, so `node.js`, `c++` and `scikit-learn` survive as
/// single terms while trailing sentence punctuation is trimmed away.
#[derive(Debug, Clone)]
pub struct SimpleTokenizer {
    /// Words never emitted.
    stopwords: Stopwords,
    /// Minimum term length in characters.
    min_length: usize,
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new(Stopwords::none(), DEFAULT_MIN_LENGTH)
    }
}

impl SimpleTokenizer {
    /// Creates a tokenizer with the given filter and minimum length.
    pub fn new(stopwords: Stopwords, min_length: usize) -> Self {
        Self {
            stopwords,
            min_length,
        }
    }

    /// Normalizes one raw token, returning `None` if it should be dropped.
    fn normalize(&self, raw: &str) -> Option<String> {
        let lower = raw.to_lowercase();
        let term = lower.trim_matches(TRIM_CHARS);
        if term.chars().count() < self.min_length || self.stopwords.contains(term) {
            return None;
        }
        Some(term.to_string())
    }
}

impl TermExtractor for SimpleTokenizer {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        TOKEN_RE
            .find_iter(text)
            .filter_map(|m| self.normalize(m.as_str()))
            .collect()
    }
}
