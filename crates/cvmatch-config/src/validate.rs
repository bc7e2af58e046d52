//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::PathBuf};

use crate::{Config, TokenizerKind};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The configured lexicon file does not exist.
    LexiconMissing {
        /// Path that doesn't exist.
        path: PathBuf,
    },
    /// The configured phrase file does not exist.
    PhraseFileMissing {
        /// Path that doesn't exist.
        path: PathBuf,
    },
    /// The phrase bonus would demote phrase terms instead of boosting them.
    PhraseBonusBelowOne {
        /// Configured bonus.
        bonus: f32,
    },
    /// `report.top` is zero, so the console tables will be empty.
    ZeroTop,
    /// `terms.min_length` is zero, so every token is kept.
    ZeroMinLength,
    /// `terms.pos` is empty, so the lexicon extractor keeps nothing.
    EmptyPartOfSpeech,
    /// The lexicon tokenizer was requested but no lexicon is configured.
    LexiconWithoutPath,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexiconMissing { path } => {
                write!(f, "lexicon file does not exist: {}", path.display())
            }
            Self::PhraseFileMissing { path } => {
                write!(f, "phrase file does not exist: {}", path.display())
            }
            Self::PhraseBonusBelowOne { bonus } => {
                write!(
                    f,
                    "phrase bonus {bonus} is below 1.0 and will lower phrase scores"
                )
            }
            Self::ZeroTop => write!(f, "report.top is 0, tables will be empty"),
            Self::ZeroMinLength => write!(f, "terms.min_length is 0, no terms are filtered"),
            Self::EmptyPartOfSpeech => {
                write!(f, "terms.pos is empty, the lexicon extractor keeps no terms")
            }
            Self::LexiconWithoutPath => {
                write!(
                    f,
                    "tokenizer is 'lexicon' but no lexicon is configured, using the simple tokenizer"
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Lexicon and phrase files that don't exist
/// - Numeric settings that make the output useless
/// - A lexicon tokenizer with nothing to load
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref path) = config.terms.lexicon
        && !path.is_file()
    {
        warnings.push(ConfigWarning::LexiconMissing { path: path.clone() });
    }

    if config.terms.tokenizer == TokenizerKind::Lexicon && config.terms.lexicon.is_none() {
        warnings.push(ConfigWarning::LexiconWithoutPath);
    }

    if let Some(ref path) = config.phrases.file
        && !path.is_file()
    {
        warnings.push(ConfigWarning::PhraseFileMissing { path: path.clone() });
    }

    if config.phrases.bonus < 1.0 {
        warnings.push(ConfigWarning::PhraseBonusBelowOne {
            bonus: config.phrases.bonus,
        });
    }

    if config.report.top == 0 {
        warnings.push(ConfigWarning::ZeroTop);
    }

    if config.terms.min_length == 0 {
        warnings.push(ConfigWarning::ZeroMinLength);
    }

    if config.terms.pos.is_empty() {
        warnings.push(ConfigWarning::EmptyPartOfSpeech);
    }

    warnings
}
