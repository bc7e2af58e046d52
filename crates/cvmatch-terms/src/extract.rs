//! Extractor selection.

use cvmatch_config::{TermSettings, TokenizerKind};
use tracing::{debug, warn};

use crate::{Lexicon, LexiconExtractor, PartOfSpeech, SimpleTokenizer, Stopwords};

/// Turns free text into normalized terms.
///
/// Duplicates are preserved so frequencies can be counted.
pub trait TermExtractor {
    /// Short name of the strategy, for display.
    fn name(&self) -> &'static str;

    /// Extracts terms from text.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// The extractor chosen for a run.
#[derive(Debug, Clone)]
pub enum Extractor {
    /// Regex tokenizer.
    Simple(SimpleTokenizer),
    /// Lexicon-backed lemmatizer.
    Lexicon(LexiconExtractor),
}

impl Extractor {
    /// Selects an extractor from settings.
    ///
    /// Never fails: when the lexicon is missing or unusable, the simple tokenizer is used.
    /// The fallback is logged as a warning only when the lexicon was explicitly requested.
    pub fn from_settings(settings: &TermSettings) -> Self {
        if settings.tokenizer == TokenizerKind::Simple {
            debug!("using simple tokenizer");
            return Self::simple(settings);
        }

        let explicit = settings.tokenizer == TokenizerKind::Lexicon;
        let Some(ref path) = settings.lexicon else {
            if explicit {
                warn!("no lexicon configured, falling back to the simple tokenizer");
            } else {
                debug!("no lexicon configured, using simple tokenizer");
            }
            return Self::simple(settings);
        };

        match Lexicon::load(path) {
            Ok(lexicon) => {
                debug!(path = %path.display(), forms = lexicon.len(), "using lexicon extractor");
                let stopwords = Stopwords::english().with_words(&settings.extra_stopwords);
                let allowed = PartOfSpeech::parse_allowed(&settings.pos);
                Self::Lexicon(LexiconExtractor::new(
                    lexicon,
                    stopwords,
                    settings.min_length,
                    allowed,
                ))
            }
            Err(e) => {
                if explicit {
                    warn!("{e}; falling back to the simple tokenizer");
                } else {
                    debug!("{e}; using simple tokenizer");
                }
                Self::simple(settings)
            }
        }
    }

    /// Builds the simple tokenizer from settings.
    fn simple(settings: &TermSettings) -> Self {
        let stopwords = Stopwords::from_settings(settings.stopwords, &settings.extra_stopwords);
        Self::Simple(SimpleTokenizer::new(stopwords, settings.min_length))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::Simple(SimpleTokenizer::default())
    }
}

impl TermExtractor for Extractor {
    fn name(&self) -> &'static str {
        match self {
            Self::Simple(t) => t.name(),
            Self::Lexicon(t) => t.name(),
        }
    }

    fn extract(&self, text: &str) -> Vec<String> {
        match self {
            Self::Simple(t) => t.extract(text),
            Self::Lexicon(t) => t.extract(text),
        }
    }
}
