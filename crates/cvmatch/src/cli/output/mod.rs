//! Rendering and JSON serialization for CLI output.

use std::{
    collections::BTreeSet,
    io::{self, IsTerminal},
    path::Path,
    process::ExitCode,
};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use cvmatch_analysis::{MatchAnalysis, MatchSummary, OverlapTerm, ScoredGap};
pub use cvmatch_highlight::{dim, header, subheader, success, warning};
use cvmatch_highlight::{Highlighter, panel};
use serde::Serialize;

/// Title of the summary panel.
const SUMMARY_TITLE: &str = "CV ↔ JD Keyword Match";

/// First line of the suggestions panel.
const SUGGESTIONS_HEADING: &str = "Suggested CV bullets to address gaps";

/// JSON output for `cvmatch match`.
#[derive(Serialize)]
pub struct JsonMatchOutput<'a> {
    /// Headline counts.
    pub summary: MatchSummary,
    /// Best gaps, truncated to the display limit.
    pub gaps: &'a [ScoredGap],
    /// Most frequent overlap terms, truncated to the display limit.
    pub overlap: &'a [OverlapTerm],
    /// Phrases found in the résumé.
    pub cv_phrases: &'a BTreeSet<String>,
    /// Phrases found in the job description.
    pub jd_phrases: &'a BTreeSet<String>,
    /// Suggested résumé bullets.
    pub suggestions: &'a [String],
    /// Absolute path of the HTML report.
    pub report: &'a Path,
}

/// One row of `cvmatch terms --json`.
#[derive(Serialize)]
pub struct JsonTermCount<'a> {
    /// The term.
    pub term: &'a str,
    /// Occurrences in the file.
    pub count: u32,
}

/// JSON output for `cvmatch terms`.
#[derive(Serialize)]
pub struct JsonTermsOutput<'a> {
    /// The analyzed file.
    pub file: &'a Path,
    /// Name of the extractor that produced the terms.
    pub extractor: &'a str,
    /// Total term occurrences.
    pub total: u64,
    /// Distinct terms.
    pub unique: usize,
    /// Most frequent terms, truncated to the display limit.
    pub terms: Vec<JsonTermCount<'a>>,
    /// Phrases found in the file.
    pub phrases: &'a BTreeSet<String>,
}

/// Prints a value as pretty JSON, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if io::stdout().is_terminal() {
                println!("{}", Highlighter::new().highlight_json(&json));
            } else {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Lines of the summary panel.
pub fn summary_lines(analysis: &MatchAnalysis) -> Vec<String> {
    let summary = analysis.summary();
    vec![
        format!("Overlap terms: {}", summary.overlap),
        format!("Gap terms: {}", summary.gaps),
        format!("JD unique terms: {}", summary.jd_unique),
        format!("CV unique terms: {}", summary.cv_unique),
    ]
}

/// Builds the table of missing terms.
pub fn gap_table(gaps: &[ScoredGap]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Term", "JD Freq", "Score"]);
    for (i, gap) in gaps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&gap.term),
            Cell::new(gap.frequency),
            Cell::new(format!("{:.2}", gap.score)),
        ]);
    }
    table
}

/// Builds the table of terms present on the résumé.
pub fn overlap_table(overlap: &[OverlapTerm]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Term", "JD Freq"]);
    for (i, term) in overlap.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&term.term),
            Cell::new(term.jd_frequency),
        ]);
    }
    table
}

/// Builds the term frequency table printed by `cvmatch terms`.
pub fn terms_table(terms: &[(&str, u32)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Term", "Count"]);
    for (i, (term, count)) in terms.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(term), Cell::new(count)]);
    }
    table
}

/// Prints the console report for `cvmatch match`.
pub fn print_match(analysis: &MatchAnalysis, top: usize, suggestions: &[String]) {
    print!("{}", panel(SUMMARY_TITLE, &summary_lines(analysis)));
    println!();

    println!("{}", header("Top Missing Terms (Gaps)"));
    println!("{}", gap_table(analysis.top_gaps(top)));
    println!();

    println!("{}", header("Overlap Terms (present on your CV)"));
    println!("{}", overlap_table(analysis.top_overlap(top)));

    if !suggestions.is_empty() {
        println!();
        print!("{}", panel("Suggestions", &suggestion_lines(suggestions)));
    }
}

/// Lines of the suggestions panel: a heading, then one bullet per suggestion.
pub fn suggestion_lines(suggestions: &[String]) -> Vec<String> {
    let mut lines = vec![SUGGESTIONS_HEADING.to_string(), String::new()];
    lines.extend(suggestions.iter().map(|s| format!("• {s}")));
    lines
}

/// Formats a phrase set for one line of console output.
pub fn phrase_line(phrases: &BTreeSet<String>) -> String {
    if phrases.is_empty() {
        dim("(none)")
    } else {
        phrases.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use cvmatch_analysis::analyze;
    use cvmatch_terms::{DEFAULT_PHRASES, SimpleTokenizer};

    use super::*;

    fn analysis() -> MatchAnalysis {
        analyze(
            "I built APIs using Python and Flask for two years.",
            "We need Python, Docker, Kubernetes and REST API experience.",
            &SimpleTokenizer::default(),
            DEFAULT_PHRASES,
            1.5,
        )
    }

    #[test]
    fn test_gap_table_formats_scores() {
        let analysis = analysis();
        let rendered = gap_table(analysis.top_gaps(20)).to_string();
        assert!(rendered.contains("JD Freq"));
        assert!(rendered.contains("docker"));
        assert!(rendered.contains("1.50"));
        assert!(rendered.contains("1.00"));
    }

    #[test]
    fn test_overlap_table_lists_shared_terms() {
        let analysis = analysis();
        let rendered = overlap_table(analysis.top_overlap(20)).to_string();
        assert!(rendered.contains("python"));
        assert!(!rendered.contains("docker"));
    }

    #[test]
    fn test_tables_respect_truncation() {
        let analysis = analysis();
        let rendered = gap_table(analysis.top_gaps(1)).to_string();
        assert!(rendered.contains(&analysis.gaps[0].term));
        assert!(!rendered.contains(&analysis.gaps[1].term));
    }

    #[test]
    fn test_summary_lines() {
        let analysis = analysis();
        let summary = analysis.summary();
        let lines = summary_lines(&analysis);
        assert_eq!(lines[0], format!("Overlap terms: {}", summary.overlap));
        assert_eq!(lines[1], format!("Gap terms: {}", summary.gaps));
    }

    #[test]
    fn test_suggestion_lines_start_with_heading() {
        let analysis = analysis();
        let lines = suggestion_lines(&analysis.suggestions(2));
        assert_eq!(lines[0], "Suggested CV bullets to address gaps");
        assert!(lines[1].is_empty());
        assert_eq!(
            lines[2],
            "• Built a small demo using docker and documented setup & outcomes."
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_phrase_line() {
        let phrases = BTreeSet::from(["docker".to_string(), "ci/cd".to_string()]);
        assert_eq!(phrase_line(&phrases), "ci/cd, docker");
        assert!(phrase_line(&BTreeSet::new()).contains("(none)"));
    }
}
