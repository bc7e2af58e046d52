//! Path resolution for paths named inside config files.
//!
//! Resolves relative and tilde-prefixed paths against the directory of the config file that
//! declared them.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a path from a config file to an absolute-or-anchored path.
///
/// Handles three cases:
/// - Tilde paths (`~/models/en.tsv`) - expanded to home directory
/// - Relative paths (`./nice.txt`, `../shared/nice.txt`) - joined onto `config_dir`
/// - Absolute paths - returned unchanged
///
/// The path is not required to exist: lexicons and phrase files are optional inputs, and
/// their absence is handled downstream.
pub fn resolve_config_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
