//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, PhraseSettings, ReportSettings, TermSettings,
    parse::{RawConfig, RawPhraseSettings, RawReportSettings, RawTermSettings},
    resolve::resolve_config_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this config are resolved against.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Every field follows the same rule: the first config that defines it wins. Paths are
/// resolved against the directory of the config that declared them, and list fields replace
/// rather than extend lower-precedence lists.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut report = ReportSettings::default();
    let mut terms = TermSettings::default();
    let mut phrases = PhraseSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let dir = parsed.dir();
        if let Some(ref raw) = parsed.config.report {
            apply_raw_report(&mut report, raw, dir)?;
        }
        if let Some(ref raw) = parsed.config.terms {
            apply_raw_terms(&mut terms, raw, dir)?;
        }
        if let Some(ref raw) = parsed.config.phrases {
            apply_raw_phrases(&mut phrases, raw, dir)?;
        }
    }

    Ok(Config {
        report,
        terms,
        phrases,
    })
}

/// Applies raw report settings to result, overwriting any present values.
fn apply_raw_report(
    result: &mut ReportSettings,
    raw: &RawReportSettings,
    dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.top {
        result.top = v;
    }
    if let Some(ref v) = raw.output {
        result.output = resolve_config_path(v, dir)?;
    }
    if let Some(v) = raw.bullets {
        result.bullets = v;
    }
    Ok(())
}

/// Applies raw term settings to result, overwriting any present values.
fn apply_raw_terms(
    result: &mut TermSettings,
    raw: &RawTermSettings,
    dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.tokenizer {
        result.tokenizer = v;
    }
    if let Some(v) = raw.min_length {
        result.min_length = v;
    }
    if let Some(v) = raw.stopwords {
        result.stopwords = v;
    }
    if let Some(ref v) = raw.extra_stopwords {
        result.extra_stopwords.clone_from(v);
    }
    if let Some(ref v) = raw.lexicon {
        result.lexicon = Some(resolve_config_path(v, dir)?);
    }
    if let Some(ref v) = raw.pos {
        result.pos = v.iter().map(|tag| tag.trim().to_uppercase()).collect();
    }
    Ok(())
}

/// Applies raw phrase settings to result, overwriting any present values.
fn apply_raw_phrases(
    result: &mut PhraseSettings,
    raw: &RawPhraseSettings,
    dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.bonus {
        result.bonus = v;
    }
    if let Some(ref v) = raw.file {
        result.file = Some(resolve_config_path(v, dir)?);
    }
    if let Some(ref v) = raw.list {
        result.list = Some(v.clone());
    }
    Ok(())
}
