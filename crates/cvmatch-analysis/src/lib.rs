//! Résumé versus job description gap analysis.
//!
//! The pipeline is linear:
//!
//! ```text
//! text → TermCounts → overlap / gaps → ranked gaps → suggestions
//! ```
//!
//! [`analyze`] runs it end to end and returns a [`MatchAnalysis`] holding the full sorted
//! lists. Display truncation is applied afterwards with [`top_n`], so the HTML report and
//! the suggestions always see every term.

#![warn(missing_docs)]

mod gaps;
mod suggest;

use std::collections::BTreeSet;

use cvmatch_terms::{TermCounts, TermExtractor, count_terms, find_phrases};
pub use gaps::{OverlapTerm, ScoredGap, overlap_and_gaps, score_gaps, sort_overlap, top_n};
use serde::Serialize;
pub use suggest::suggest_bullets;
use tracing::debug;

/// Result of comparing one résumé with one job description.
#[derive(Debug, Clone, Serialize)]
pub struct MatchAnalysis {
    /// Term frequencies of the résumé.
    pub cv_counts: TermCounts,
    /// Term frequencies of the job description.
    pub jd_counts: TermCounts,
    /// Phrases found in the résumé.
    pub cv_phrases: BTreeSet<String>,
    /// Phrases found in the job description.
    pub jd_phrases: BTreeSet<String>,
    /// Terms in both documents, most frequent in the job description first.
    pub overlap: Vec<OverlapTerm>,
    /// Job description terms missing from the résumé, best first.
    pub gaps: Vec<ScoredGap>,
}

/// Headline counts of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Number of overlapping terms.
    pub overlap: usize,
    /// Number of gap terms.
    pub gaps: usize,
    /// Distinct terms in the job description.
    pub jd_unique: usize,
    /// Distinct terms in the résumé.
    pub cv_unique: usize,
}

impl MatchAnalysis {
    /// Returns the headline counts.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            overlap: self.overlap.len(),
            gaps: self.gaps.len(),
            jd_unique: self.jd_counts.len(),
            cv_unique: self.cv_counts.len(),
        }
    }

    /// Returns the `n` best gaps.
    pub fn top_gaps(&self, n: usize) -> &[ScoredGap] {
        top_n(&self.gaps, n)
    }

    /// Returns the `n` most frequent overlap terms.
    pub fn top_overlap(&self, n: usize) -> &[OverlapTerm] {
        top_n(&self.overlap, n)
    }

    /// Returns up to `max` suggested bullets for the best gaps.
    pub fn suggestions(&self, max: usize) -> Vec<String> {
        suggest_bullets(self.gaps.iter().map(|g| g.term.as_str()), max)
    }
}

/// Compares a résumé with a job description.
///
/// Both texts go through the same extractor. `phrases` are matched against the raw texts and
/// gaps found among the job description phrases are boosted by `bonus`.
pub fn analyze<E, S>(
    cv_text: &str,
    jd_text: &str,
    extractor: &E,
    phrases: &[S],
    bonus: f64,
) -> MatchAnalysis
where
    E: TermExtractor,
    S: AsRef<str>,
{
    let cv_counts = count_terms(extractor, cv_text);
    let jd_counts = count_terms(extractor, jd_text);
    debug!(
        extractor = extractor.name(),
        cv_terms = cv_counts.len(),
        jd_terms = jd_counts.len(),
        "counted terms"
    );

    let cv_phrases = find_phrases(cv_text, phrases);
    let jd_phrases = find_phrases(jd_text, phrases);

    let (overlap, gaps) = overlap_and_gaps(&cv_counts, &jd_counts);
    let overlap = sort_overlap(overlap, &jd_counts);
    let gaps = score_gaps(gaps, &jd_counts, &jd_phrases, bonus);
    debug!(overlap = overlap.len(), gaps = gaps.len(), "scored gaps");

    MatchAnalysis {
        cv_counts,
        jd_counts,
        cv_phrases,
        jd_phrases,
        overlap,
        gaps,
    }
}
