//! Configuration file parsing.
//!
//! Parses individual `.cvmatch.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, StopwordSet, TokenizerKind};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Report section.
    pub report: Option<RawReportSettings>,
    /// Term extraction section.
    pub terms: Option<RawTermSettings>,
    /// Phrase section.
    pub phrases: Option<RawPhraseSettings>,
}

/// Raw report settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReportSettings {
    /// Rows shown per console table.
    pub top: Option<usize>,
    /// HTML report path, relative to the config file.
    pub output: Option<String>,
    /// Maximum suggested bullets.
    pub bullets: Option<usize>,
}

/// Raw term extraction settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTermSettings {
    /// Extraction strategy.
    pub tokenizer: Option<TokenizerKind>,
    /// Minimum term length.
    pub min_length: Option<usize>,
    /// Built-in stop-word list.
    pub stopwords: Option<StopwordSet>,
    /// Extra stop-words. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub extra_stopwords: Option<Vec<String>>,
    /// Lexicon path, relative to the config file.
    pub lexicon: Option<String>,
    /// Allowed POS tags. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub pos: Option<Vec<String>>,
}

/// Raw phrase settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPhraseSettings {
    /// Phrase bonus multiplier.
    pub bonus: Option<f32>,
    /// Phrase file path, relative to the config file.
    pub file: Option<String>,
    /// Inline phrase list. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub list: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
