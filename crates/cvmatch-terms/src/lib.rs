//! Term extraction for résumé and job description text.
//!
//! Free text is turned into normalized terms by one of two strategies, both implementing
//! [`TermExtractor`]:
//!
//! - **Simple**: a regex tokenizer that lowercases, trims joiner punctuation and filters by
//!   length and stop-words. Needs nothing beyond the text.
//! - **Lexicon**: lemmatizes and filters by part of speech using a tab-separated lexicon
//!   file. Selected when a lexicon is configured and loads.
//!
//! [`Extractor::from_settings`] chooses once per run and never fails. The extracted terms
//! are counted into a [`TermCounts`] table per document. Independently, [`find_phrases`]
//! checks raw text for literal phrases such as `ci/cd` that tokenization would break up.

#![warn(missing_docs)]

mod counts;
mod extract;
mod lexicon;
mod phrase;
mod source;
mod stopwords;
mod tokenizer;

pub use counts::TermCounts;
pub use extract::{Extractor, TermExtractor};
pub use lexicon::{Lexicon, LexiconEntry, LexiconError, LexiconExtractor, PartOfSpeech};
pub use phrase::{DEFAULT_PHRASES, PhraseList, PhraseSource, find_phrases};
pub use source::{TermsError, decode_lossy, read_text};
pub use stopwords::Stopwords;
pub use tokenizer::SimpleTokenizer;

/// Extracts and counts the terms of one document.
pub fn count_terms(extractor: &impl TermExtractor, text: &str) -> TermCounts {
    TermCounts::from_terms(extractor.extract(text))
}
