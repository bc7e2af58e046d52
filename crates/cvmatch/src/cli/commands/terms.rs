//! Implementation of `cvmatch terms`.

use std::process::ExitCode;

use cvmatch_analysis::top_n;
use cvmatch_terms::{TermExtractor, count_terms};

use super::shared::read_input;
use crate::cli::{
    args::TermsCommand,
    context::CommandContext,
    output::{
        JsonTermCount, JsonTermsOutput, dim, header, phrase_line, print_json, subheader,
        terms_table,
    },
};

/// Shows what the selected extractor produces for one file.
pub fn run(ctx: &CommandContext, cmd: &TermsCommand) -> ExitCode {
    let limit = cmd.limit.unwrap_or(ctx.config.report.top);
    let path = ctx.resolve(&cmd.file);

    let text = match read_input(&path) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let phrases = match cmd.extraction.phrases(ctx) {
        Ok(phrases) => phrases,
        Err(code) => return code,
    };
    let extractor = cmd.extraction.extractor(ctx);

    let counts = count_terms(&extractor, &text);
    let sorted = counts.sorted();
    let shown = top_n(&sorted, limit);
    let found = phrases.find_in(&text);

    if cmd.json {
        return print_json(&JsonTermsOutput {
            file: &path,
            extractor: extractor.name(),
            total: counts.total(),
            unique: counts.len(),
            terms: shown
                .iter()
                .map(|&(term, count)| JsonTermCount { term, count })
                .collect(),
            phrases: &found,
        });
    }

    println!("{}", header(&path.display().to_string()));
    println!("{} {}", subheader("Extractor:"), extractor.name());
    println!(
        "{} {} {}",
        subheader("Terms:"),
        counts.len(),
        dim(&format!("({} occurrences)", counts.total()))
    );
    println!();
    println!("{}", terms_table(shown));
    println!();
    println!("{} {}", subheader("Phrases:"), phrase_line(&found));
    println!("{}", dim(&format!("from {}", phrases.source())));
    ExitCode::SUCCESS
}
