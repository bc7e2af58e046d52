//! Integration tests for cvmatch-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use cvmatch_config::{
    CONFIG_FILENAME, Config, ConfigError, ConfigWarning, StopwordSet, TokenizerKind,
};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Owned temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_ignores_global() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "root = true\n");

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.report.top, 20);
    assert_eq!(config.terms.tokenizer, TokenizerKind::Auto);
    assert_eq!(config.terms.stopwords, StopwordSet::None);
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
root = true

[report]
top = 40
bullets = 4

[terms]
stopwords = "english"
extra_stopwords = ["team"]
"#,
    );
    env.create_file(
        &format!("acme/{CONFIG_FILENAME}"),
        r#"
[report]
top = 8

[phrases]
bonus = 2.5
file = "nice.txt"
"#,
    );
    let cwd = env.create_dir("acme/round2");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.report.top, 8);
    assert_eq!(config.report.bullets, 4);
    assert_eq!(config.terms.stopwords, StopwordSet::English);
    assert_eq!(config.terms.extra_stopwords, vec!["team"]);
    assert!((config.phrases.bonus - 2.5).abs() < f32::EPSILON);
    assert_eq!(config.phrases.file, Some(env.path().join("acme/nice.txt")));
}

#[test]
fn test_load_error_invalid_toml() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "root = true\n[report\n");

    let result = Config::load(env.path());
    assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
}

#[test]
fn test_load_error_wrong_type() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "root = true\n[report]\ntop = \"many\"\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILENAME));
}

#[test]
fn test_load_from_files_empty_list() {
    let config = Config::load_from_files(&[]).unwrap();
    assert_eq!(config.report.top, 20);
    assert_eq!(config.report.output, PathBuf::from("report.html"));
}

#[test]
fn test_load_from_files_precedence() {
    let env = TestEnv::new();
    let high = env.create_file("high.toml", "[terms]\ntokenizer = \"simple\"\n");
    let low = env.create_file(
        "low.toml",
        "[terms]\ntokenizer = \"lexicon\"\nmin_length = 2\n",
    );

    let config = Config::load_from_files(&[high, low]).unwrap();
    assert_eq!(config.terms.tokenizer, TokenizerKind::Simple);
    assert_eq!(config.terms.min_length, 2);
}

#[test]
fn test_load_from_files_missing_file() {
    let env = TestEnv::new();
    let result = Config::load_from_files(&[env.path().join("absent.toml")]);
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn test_validate_after_load() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[terms]\nlexicon = \"missing.tsv\"\n[phrases]\nbonus = 0.9\n",
    );

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate();

    assert!(warnings.contains(&ConfigWarning::LexiconMissing {
        path: env.path().join("missing.tsv"),
    }));
    assert!(warnings.contains(&ConfigWarning::PhraseBonusBelowOne { bonus: 0.9 }));
}

#[test]
fn test_settings_round_trip_through_toml() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[report]\ntop = 7\n[phrases]\nlist = [\"ci/cd\", \"unit testing\"]\n",
    );
    let config = Config::load(env.path()).unwrap();

    let toml = config.settings_to_toml().unwrap();
    let reparsed_path = env.create_file("effective.toml", &toml);
    let reparsed = Config::load_from_files(&[reparsed_path]).unwrap();

    assert_eq!(reparsed.report.top, 7);
    assert_eq!(
        reparsed.phrases.list,
        Some(vec!["ci/cd".to_string(), "unit testing".to_string()])
    );
}
