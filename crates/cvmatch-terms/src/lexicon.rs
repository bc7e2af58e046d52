//! Lexicon-backed term extraction.
//!
//! A lexicon is a tab-separated file mapping surface forms to a lemma and a Universal POS
//! tag:
//!
//! ```text
//! # form	lemma	pos
//! built	build	VERB
//! apis	api	NOUN
//! kubernetes	kubernetes	PROPN
//! ```
//!
//! Blank lines and `#` comments are ignored. Forms are matched case-insensitively. The
//! extractor keeps alphabetic tokens whose lemma is long enough, is not a stop-word and
//! carries an allowed part of speech.

use std::{
    collections::{HashMap, HashSet},
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::{Stopwords, TermExtractor};

/// Word tokens: runs of Unicode word characters.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Errors raised while loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon {path}: {source}")]
    Read {
        /// Path of the lexicon.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line could not be parsed.
    #[error("malformed lexicon entry at {path}:{line}: {reason}")]
    Malformed {
        /// Path of the lexicon.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// Universal POS tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Adjective.
    Adj,
    /// Adposition.
    Adp,
    /// Adverb.
    Adv,
    /// Auxiliary verb.
    Aux,
    /// Coordinating conjunction.
    Cconj,
    /// Determiner.
    Det,
    /// Interjection.
    Intj,
    /// Noun.
    Noun,
    /// Numeral.
    Num,
    /// Particle.
    Part,
    /// Pronoun.
    Pron,
    /// Proper noun.
    Propn,
    /// Punctuation.
    Punct,
    /// Subordinating conjunction.
    Sconj,
    /// Symbol.
    Sym,
    /// Verb.
    Verb,
    /// Other.
    X,
}

impl PartOfSpeech {
    /// All tags, in Universal Dependencies order.
    pub const ALL: [Self; 17] = [
        Self::Adj,
        Self::Adp,
        Self::Adv,
        Self::Aux,
        Self::Cconj,
        Self::Det,
        Self::Intj,
        Self::Noun,
        Self::Num,
        Self::Part,
        Self::Pron,
        Self::Propn,
        Self::Punct,
        Self::Sconj,
        Self::Sym,
        Self::Verb,
        Self::X,
    ];

    /// Returns the tag as written in lexicon files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }

    /// Parses a list of tags, skipping and logging unknown ones.
    pub fn parse_allowed<S: AsRef<str>>(tags: &[S]) -> HashSet<Self> {
        tags.iter()
            .filter_map(|tag| match tag.as_ref().parse() {
                Ok(pos) => Some(pos),
                Err(e) => {
                    warn!("ignoring POS filter entry: {e}");
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|pos| pos.as_str() == upper)
            .ok_or_else(|| format!("unknown part-of-speech tag '{s}'"))
    }
}

/// Lemma and tag for one surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Lowercased lemma.
    pub lemma: String,
    /// Part of speech.
    pub pos: PartOfSpeech,
}

/// Surface form lookup table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Entries keyed by lowercased form.
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// Loads a lexicon file.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let bytes = fs::read(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&crate::decode_lossy(&bytes), path)
    }

    /// Parses lexicon contents. `path` is used for error reporting.
    ///
    /// When a form appears more than once, the first entry wins.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();
        for (idx, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let malformed = |reason: String| LexiconError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            };

            let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
            let [form, lemma, pos, ..] = fields.as_slice() else {
                return Err(malformed(format!(
                    "expected 3 tab-separated fields, found {}",
                    fields.len()
                )));
            };
            if form.is_empty() || lemma.is_empty() {
                return Err(malformed("empty form or lemma".to_string()));
            }
            let pos: PartOfSpeech = pos.parse().map_err(malformed)?;

            entries
                .entry(form.to_lowercase())
                .or_insert_with(|| LexiconEntry {
                    lemma: lemma.to_lowercase(),
                    pos,
                });
        }
        Ok(Self { entries })
    }

    /// Looks up a form, ignoring case.
    pub fn get(&self, form: &str) -> Option<&LexiconEntry> {
        self.entries.get(&form.to_lowercase())
    }

    /// Returns the number of forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no forms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Term extractor that lemmatizes and POS-filters through a `Lexicon`.
#[derive(Debug, Clone)]
pub struct LexiconExtractor {
    /// Form lookup.
    lexicon: Lexicon,
    /// Words never emitted, checked on the form and the lemma.
    stopwords: Stopwords,
    /// Minimum lemma length in characters.
    min_length: usize,
    /// Tags that are kept.
    allowed: HashSet<PartOfSpeech>,
}

impl LexiconExtractor {
    /// Creates an extractor.
    pub fn new(
        lexicon: Lexicon,
        stopwords: Stopwords,
        min_length: usize,
        allowed: HashSet<PartOfSpeech>,
    ) -> Self {
        Self {
            lexicon,
            stopwords,
            min_length,
            allowed,
        }
    }

    /// Returns the lemma and tag for one token.
    ///
    /// Unknown forms are their own lemma and are tagged as proper nouns when capitalized.
    fn analyze(&self, token: &str) -> (String, PartOfSpeech) {
        if let Some(entry) = self.lexicon.get(token) {
            return (entry.lemma.clone(), entry.pos);
        }
        let pos = if token.chars().next().is_some_and(char::is_uppercase) {
            PartOfSpeech::Propn
        } else {
            PartOfSpeech::Noun
        };
        (token.to_lowercase(), pos)
    }
}

impl TermExtractor for LexiconExtractor {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| token.chars().all(char::is_alphabetic))
            .filter(|token| !self.stopwords.contains(token))
            .filter_map(|token| {
                let (lemma, pos) = self.analyze(token);
                let keep = !self.stopwords.contains(&lemma)
                    && lemma.chars().count() >= self.min_length
                    && self.allowed.contains(&pos);
                keep.then_some(lemma)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# form\tlemma\tpos
built\tbuild\tVERB
APIs\tapi\tNOUN
using\tuse\tVERB
the\tthe\tDET
quickly\tquickly\tADV
skilled\tskilled\tADJ
";

    fn lexicon() -> Lexicon {
        Lexicon::parse(SAMPLE, Path::new("sample.tsv")).unwrap()
    }

    fn default_allowed() -> HashSet<PartOfSpeech> {
        PartOfSpeech::parse_allowed(cvmatch_config::DEFAULT_POS_TAGS)
    }

    fn extractor(stopwords: Stopwords) -> LexiconExtractor {
        LexiconExtractor::new(lexicon(), stopwords, 3, default_allowed())
    }

    #[test]
    fn test_parse_lexicon() {
        let lexicon = lexicon();
        assert_eq!(lexicon.len(), 6);
        let entry = lexicon.get("apis").unwrap();
        assert_eq!(entry.lemma, "api");
        assert_eq!(entry.pos, PartOfSpeech::Noun);
        assert!(lexicon.get("BUILT").is_some());
    }

    #[test]
    fn test_parse_first_entry_wins() {
        let lexicon = Lexicon::parse("lead\tlead\tVERB\nlead\tlead\tNOUN\n", Path::new("x")).unwrap();
        assert_eq!(lexicon.get("lead").unwrap().pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = Lexicon::parse("ok\tok\tNOUN\n\nbroken\tbroken\n", Path::new("en.tsv")).unwrap_err();
        match err {
            LexiconError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = Lexicon::parse("word\tword\tTHING\n", Path::new("en.tsv")).unwrap_err();
        assert!(err.to_string().contains("THING"));
        assert!(err.to_string().contains("en.tsv:1"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Lexicon::load(&dir.path().join("absent.tsv"));
        assert!(matches!(result, Err(LexiconError::Read { .. })));
    }

    #[test]
    fn test_pos_round_trip() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.to_string().parse::<PartOfSpeech>().unwrap(), pos);
        }
        assert_eq!("propn".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Propn);
        assert!("NOUNS".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_parse_allowed_skips_unknown() {
        let allowed = PartOfSpeech::parse_allowed(&["NOUN", "bogus", "verb"]);
        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains(&PartOfSpeech::Verb));
    }

    #[test]
    fn test_extract_lemmatizes_and_filters() {
        let stopwords = Stopwords::none().with_words(&["i", "and", "the"]);
        let terms = extractor(stopwords)
            .extract("I built APIs quickly using Python and the Flask framework.");
        assert_eq!(terms, vec!["build", "api", "use", "python", "flask", "framework"]);
    }

    #[test]
    fn test_extract_skips_non_alphabetic_tokens() {
        let terms = extractor(Stopwords::none()).extract("python3 k8s docker 2024");
        assert_eq!(terms, vec!["docker"]);
    }

    #[test]
    fn test_extract_stopword_on_lemma() {
        let stopwords = Stopwords::none().with_words(&["build"]);
        let terms = extractor(stopwords).extract("built rapport");
        assert_eq!(terms, vec!["rapport"]);
    }

    #[test]
    fn test_extract_respects_pos_filter() {
        let only_nouns = PartOfSpeech::parse_allowed(&["NOUN"]);
        let extractor = LexiconExtractor::new(lexicon(), Stopwords::none(), 3, only_nouns);
        // "Kafka" is capitalized and unknown, so it is a proper noun
        let terms = extractor.extract("skilled engineer built Kafka APIs");
        assert_eq!(terms, vec!["engineer", "api"]);
    }
}
