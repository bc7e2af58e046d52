//! Shared helpers for command implementations.

use std::{path::Path, process::ExitCode};

use cvmatch_config::TermSettings;
use cvmatch_terms::{Extractor, PhraseList, TermExtractor, read_text};
use tracing::debug;

use crate::cli::{args::ExtractionArgs, context::CommandContext};

impl ExtractionArgs {
    /// Builds term settings by applying CLI overrides to the loaded configuration.
    pub fn term_settings(&self, ctx: &CommandContext) -> TermSettings {
        let mut settings = ctx.config.terms.clone();
        if let Some(kind) = self.tokenizer {
            settings.tokenizer = kind;
        }
        if let Some(ref lexicon) = self.lexicon {
            settings.lexicon = Some(ctx.resolve(lexicon));
        }
        if let Some(set) = self.stopwords {
            settings.stopwords = set;
        }
        if let Some(min_length) = self.min_length {
            settings.min_length = min_length;
        }
        settings
    }

    /// Selects the term extractor for this run.
    pub fn extractor(&self, ctx: &CommandContext) -> Extractor {
        let extractor = Extractor::from_settings(&self.term_settings(ctx));
        debug!(extractor = extractor.name(), "selected extractor");
        extractor
    }

    /// Resolves the effective phrase list.
    pub fn phrases(&self, ctx: &CommandContext) -> Result<PhraseList, ExitCode> {
        let cli_file = self.nice.as_deref().map(|p| ctx.resolve(p));
        PhraseList::resolve(cli_file.as_deref(), &ctx.config.phrases).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Reads an input document or exits with a consistent error.
pub fn read_input(path: &Path) -> Result<String, ExitCode> {
    read_text(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}
