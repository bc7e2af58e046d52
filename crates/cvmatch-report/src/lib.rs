//! HTML report rendering.
//!
//! Produces a single self-contained HTML document (inline stylesheet, no external assets)
//! with the detected phrases, the full ranked gap list and the full overlap list.

#![warn(missing_docs)]

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use cvmatch_analysis::MatchAnalysis;
use thiserror::Error;
use tracing::debug;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("failed to write report {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Page title and top heading.
const TITLE: &str = "CV ↔ JD Keyword Match";

/// Inline stylesheet.
const STYLE: &str = "\
body { font-family: Arial, system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 2rem; }
h1, h2 { margin-top: 1.2rem; }
table { border-collapse: collapse; margin: 1rem 0; width: 100%; }
th { background: #f5f5f5; text-align: left; }
tr:nth-child(even) { background: #fafafa; }
.badge { display:inline-block; padding: 4px 8px; margin: 2px; border-radius: 6px; background:#eef; }
.badge.red { background: #fee; }
.badge.green { background: #efe; }
";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the report as an HTML document.
pub fn render_html(analysis: &MatchAnalysis) -> String {
    let gap_rows: Vec<[String; 4]> = analysis
        .gaps
        .iter()
        .enumerate()
        .map(|(i, gap)| {
            [
                (i + 1).to_string(),
                gap.term.clone(),
                gap.frequency.to_string(),
                format!("{:.2}", gap.score),
            ]
        })
        .collect();
    let overlap_rows: Vec<[String; 3]> = analysis
        .overlap
        .iter()
        .enumerate()
        .map(|(i, o)| [(i + 1).to_string(), o.term.clone(), o.jd_frequency.to_string()])
        .collect();

    format!(
        "<!doctype html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{TITLE}</title>
<style>
{STYLE}</style>
</head>
<body>
<h1>{TITLE}</h1>

<h2>Detected Phrases</h2>
<p><strong>On CV:</strong> {cv_badges}</p>
<p><strong>In JD:</strong> {jd_badges}</p>

<h2>Top Missing Terms (Gaps)</h2>
{gaps_table}

<h2>Overlap Terms (present on your CV)</h2>
{overlap_table}

<p style=\"margin-top:2rem;color:#666\">Generated by cvmatch</p>
</body>
</html>
",
        cv_badges = badges(&analysis.cv_phrases, "green"),
        jd_badges = badges(&analysis.jd_phrases, "red"),
        gaps_table = table(&["#", "Term", "JD Freq", "Score"], &gap_rows),
        overlap_table = table(&["#", "Term", "JD Freq"], &overlap_rows),
    )
}

/// Renders the report and writes it to `path`, creating parent directories.
pub fn write_html_report(analysis: &MatchAnalysis, path: &Path) -> Result<(), ReportError> {
    let html = render_html(analysis);
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, html).map_err(write_err)?;
    debug!(path = %path.display(), "wrote html report");
    Ok(())
}

/// Renders phrases as sorted badges, or an em dash when there are none.
fn badges(phrases: &BTreeSet<String>, class: &str) -> String {
    if phrases.is_empty() {
        return "—".to_string();
    }
    phrases
        .iter()
        .map(|p| format!("<span class='badge {class}'>{}</span>", escape_html(p)))
        .collect()
}

/// Renders a bordered table with escaped cells.
fn table<R: AsRef<[String]>>(headers: &[&str], rows: &[R]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .as_ref()
                .iter()
                .map(|c| format!("<td>{}</td>", escape_html(c)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!(
        "<table border='1' cellpadding='6' cellspacing='0'><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"
    )
}
