//! Implementation of `cvmatch match`.

use std::{fs, process::ExitCode};

use cvmatch_analysis::analyze;
use cvmatch_report::write_html_report;
use tracing::{debug, warn};

use super::shared::read_input;
use crate::cli::{
    args::MatchCommand,
    context::CommandContext,
    output::{JsonMatchOutput, print_json, print_match},
};

/// Compares a résumé with a job description and writes the HTML report.
pub fn run(ctx: &CommandContext, cmd: &MatchCommand) -> ExitCode {
    let report = &ctx.config.report;
    let top = cmd.top.unwrap_or(report.top);
    let bullets = cmd.bullets.unwrap_or(report.bullets);
    let bonus = cmd.bonus.unwrap_or(ctx.config.phrases.bonus);
    let output = ctx.resolve(cmd.output.as_deref().unwrap_or(&report.output));
    if !bonus.is_finite() || bonus < 0.0 {
        eprintln!("error: phrase bonus must be a finite, non-negative number, got {bonus}");
        return ExitCode::FAILURE;
    }
    if bonus < 1.0 {
        warn!(bonus, "phrase bonus below 1.0 lowers the score of detected phrases");
    }

    let cv_text = match read_input(&ctx.resolve(&cmd.cv)) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let jd_text = match read_input(&ctx.resolve(&cmd.job)) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let phrases = match cmd.extraction.phrases(ctx) {
        Ok(phrases) => phrases,
        Err(code) => return code,
    };
    debug!(source = %phrases.source(), count = phrases.phrases().len(), "phrase list");
    let extractor = cmd.extraction.extractor(ctx);

    let analysis = analyze(
        &cv_text,
        &jd_text,
        &extractor,
        phrases.phrases(),
        f64::from(bonus),
    );

    if let Err(e) = write_html_report(&analysis, &output) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    let output = fs::canonicalize(&output).unwrap_or(output);

    let suggestions = analysis.suggestions(bullets);

    if cmd.json {
        return print_json(&JsonMatchOutput {
            summary: analysis.summary(),
            gaps: analysis.top_gaps(top),
            overlap: analysis.top_overlap(top),
            cv_phrases: &analysis.cv_phrases,
            jd_phrases: &analysis.jd_phrases,
            suggestions: &suggestions,
            report: &output,
        });
    }

    print_match(&analysis, top, &suggestions);
    println!();
    println!("Saved HTML report to: {}", output.display());
    ExitCode::SUCCESS
}
