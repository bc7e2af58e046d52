//! Configuration system for cvmatch.
//!
//! cvmatch uses TOML configuration files named `.cvmatch.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.cvmatch.toml` files found, then loading `~/.cvmatch.toml` as the global config with
//! lowest precedence. Command-line flags override whatever the files resolve to.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
    str,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawPhraseSettings, RawReportSettings, RawTermSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_config_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default number of rows per console table.
pub const DEFAULT_TOP: usize = 20;
/// Default HTML report path.
pub const DEFAULT_OUTPUT: &str = "report.html";
/// Default maximum number of suggested bullets.
pub const DEFAULT_BULLETS: usize = 10;
/// Default minimum term length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;
/// Default score multiplier for gaps that are detected phrases.
pub const DEFAULT_PHRASE_BONUS: f32 = 1.5;

/// Top-level merged configuration for cvmatch.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.cvmatch.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Report and console output settings.
    pub report: ReportSettings,
    /// Term extraction settings.
    pub terms: TermSettings,
    /// Phrase detection and bonus settings.
    pub phrases: PhraseSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.cvmatch.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.cvmatch.toml` file. Unset optional paths are
    /// omitted.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            report: &self.report,
            terms: &self.terms,
            phrases: &self.phrases,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Report and console output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Number of rows shown in each console table.
    pub top: usize,
    /// Path of the HTML report.
    pub output: PathBuf,
    /// Maximum number of suggested résumé bullets.
    pub bullets: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            output: PathBuf::from(DEFAULT_OUTPUT),
            bullets: DEFAULT_BULLETS,
        }
    }
}

/// Term extraction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TermSettings {
    /// Which extraction strategy to use.
    pub tokenizer: TokenizerKind,
    /// Terms shorter than this (in characters) are dropped.
    pub min_length: usize,
    /// Built-in stop-word list to filter with.
    pub stopwords: StopwordSet,
    /// Additional stop-words, matched case-insensitively.
    pub extra_stopwords: Vec<String>,
    /// Lexicon file used by the model-based extractor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
    /// Universal POS tags kept by the model-based extractor.
    pub pos: Vec<String>,
}

impl Default for TermSettings {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::default(),
            min_length: DEFAULT_MIN_LENGTH,
            stopwords: StopwordSet::default(),
            extra_stopwords: Vec::new(),
            lexicon: None,
            pos: DEFAULT_POS_TAGS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Part-of-speech tags kept by default: nouns, proper nouns, verbs and adjectives.
pub const DEFAULT_POS_TAGS: &[&str] = &["NOUN", "PROPN", "VERB", "ADJ"];

/// Phrase detection and bonus settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhraseSettings {
    /// Score multiplier for gap terms that are also detected phrases.
    pub bonus: f32,
    /// Phrase file, one phrase per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Inline phrase list replacing the built-in defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

impl Default for PhraseSettings {
    fn default() -> Self {
        Self {
            bonus: DEFAULT_PHRASE_BONUS,
            file: None,
            list: None,
        }
    }
}

/// Term extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Use the lexicon model when one loads, otherwise the simple tokenizer.
    #[default]
    Auto,
    /// Always use the regex-based tokenizer.
    Simple,
    /// Prefer the lexicon model; falling back is logged as a warning.
    Lexicon,
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Simple => write!(f, "simple"),
            Self::Lexicon => write!(f, "lexicon"),
        }
    }
}

impl str::FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "simple" | "regex" => Ok(Self::Simple),
            "lexicon" | "model" => Ok(Self::Lexicon),
            _ => Err(format!(
                "unknown tokenizer '{s}', expected one of: auto, simple, lexicon"
            )),
        }
    }
}

/// Built-in stop-word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordSet {
    /// No built-in stop-words.
    #[default]
    None,
    /// English stop-words (Stopwords ISO).
    English,
}

impl fmt::Display for StopwordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::English => write!(f, "english"),
        }
    }
}

impl str::FromStr for StopwordSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "english" | "en" => Ok(Self::English),
            _ => Err(format!(
                "unknown stop-word set '{s}', expected one of: none, english"
            )),
        }
    }
}

/// Borrowed view of the settings for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Report settings.
    report: &'a ReportSettings,
    /// Term extraction settings.
    terms: &'a TermSettings,
    /// Phrase settings.
    phrases: &'a PhraseSettings,
}
