//! Phrase detection.
//!
//! Phrases are matched as case-insensitive substrings of the raw text, independent of
//! tokenization, so skills such as `ci/cd` or `rest api` are caught even though the
//! tokenizers would split or drop them.

use std::{
    collections::BTreeSet,
    fmt,
    path::{Path, PathBuf},
};

use cvmatch_config::PhraseSettings;
use tracing::debug;

use crate::{TermsError, read_text};

/// Built-in phrase list used when nothing else is configured.
pub const DEFAULT_PHRASES: &[&str] = &[
    "docker",
    "ci/cd",
    "git",
    "kubernetes",
    "linux",
    "sql",
    "pandas",
    "numpy",
    "fastapi",
    "flask",
    "django",
    "pytest",
    "unit testing",
    "rest api",
    "oop",
    "data structures",
    "algorithms",
];

/// Returns the phrases found in `text`, normalized to lowercase.
///
/// Empty and whitespace-only phrases are ignored.
pub fn find_phrases<I, S>(text: &str, phrases: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let haystack = text.to_lowercase();
    phrases
        .into_iter()
        .filter_map(|phrase| {
            let needle = phrase.as_ref().trim().to_lowercase();
            (!needle.is_empty() && haystack.contains(&needle)).then_some(needle)
        })
        .collect()
}

/// Where the effective phrase list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseSource {
    /// A phrase file named on the command line.
    Cli(PathBuf),
    /// The `phrases.file` config setting.
    ConfigFile(PathBuf),
    /// The `phrases.list` config setting.
    ConfigList,
    /// The built-in list.
    Defaults,
}

impl fmt::Display for PhraseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli(path) | Self::ConfigFile(path) => write!(f, "{}", path.display()),
            Self::ConfigList => write!(f, "config phrase list"),
            Self::Defaults => write!(f, "built-in phrases"),
        }
    }
}

/// The effective phrase list for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    /// Phrases, trimmed and non-empty.
    phrases: Vec<String>,
    /// Origin of the phrases.
    source: PhraseSource,
}

impl Default for PhraseList {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            source: PhraseSource::Defaults,
        }
    }
}

impl PhraseList {
    /// Reads a phrase file: one phrase per line, blank lines ignored.
    pub fn from_file(path: &Path) -> Result<Vec<String>, TermsError> {
        Ok(parse_lines(&read_text(path)?))
    }

    /// Resolves the phrase list.
    ///
    /// Precedence, highest first: the command-line file, the configured file, the
    /// configured list, the built-in defaults. Files that do not exist are skipped.
    pub fn resolve(cli_file: Option<&Path>, settings: &PhraseSettings) -> Result<Self, TermsError> {
        let candidates = [
            cli_file.map(|p| PhraseSource::Cli(p.to_path_buf())),
            settings
                .file
                .as_ref()
                .map(|p| PhraseSource::ConfigFile(p.clone())),
        ];

        for source in candidates.into_iter().flatten() {
            let (PhraseSource::Cli(path) | PhraseSource::ConfigFile(path)) = &source else {
                continue;
            };
            if !path.is_file() {
                debug!(path = %path.display(), "phrase file not found, skipping");
                continue;
            }
            let phrases = Self::from_file(path)?;
            debug!(count = phrases.len(), %source, "loaded phrases");
            return Ok(Self { phrases, source });
        }

        if let Some(ref list) = settings.list {
            let phrases = list
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            return Ok(Self {
                phrases,
                source: PhraseSource::ConfigList,
            });
        }

        Ok(Self::default())
    }

    /// Returns the phrases.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Returns where the phrases came from.
    pub fn source(&self) -> &PhraseSource {
        &self.source
    }

    /// Returns the phrases found in `text`.
    pub fn find_in(&self, text: &str) -> BTreeSet<String> {
        find_phrases(text, &self.phrases)
    }
}

/// Splits phrase file contents into trimmed, non-empty lines.
fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
