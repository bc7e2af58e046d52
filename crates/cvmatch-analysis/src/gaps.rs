//! Overlap and gap set algebra, gap scoring and ordering.

use std::{cmp::Ordering, collections::BTreeSet};

use cvmatch_terms::TermCounts;
use serde::Serialize;

/// A term present in both documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapTerm {
    /// The term.
    pub term: String,
    /// Occurrences in the job description.
    pub jd_frequency: u32,
}

/// A job description term missing from the résumé, with its ranking score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGap {
    /// The term.
    pub term: String,
    /// `frequency × bonus`.
    pub score: f64,
    /// Occurrences in the job description.
    pub frequency: u32,
}

impl ScoredGap {
    /// Ranking order: score descending, then frequency descending, then term.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.term.cmp(&other.term))
    }
}

/// Splits the job description's terms into overlap and gaps.
///
/// Returns `(cv ∩ jd, jd − cv)`.
pub fn overlap_and_gaps<'a>(
    cv: &'a TermCounts,
    jd: &'a TermCounts,
) -> (BTreeSet<&'a str>, BTreeSet<&'a str>) {
    jd.term_set()
        .into_iter()
        .partition(|term| cv.contains(term))
}

/// Scores and ranks gap terms.
///
/// Frequency is the job description count (1 if the term is unknown to `jd`). Terms in
/// `jd_phrases` have their score multiplied by `bonus`.
pub fn score_gaps<'a, I>(
    gaps: I,
    jd: &TermCounts,
    jd_phrases: &BTreeSet<String>,
    bonus: f64,
) -> Vec<ScoredGap>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<ScoredGap> = gaps
        .into_iter()
        .map(|term| {
            let frequency = jd.get(term).max(1);
            let multiplier = if jd_phrases.contains(term) { bonus } else { 1.0 };
            ScoredGap {
                term: term.to_string(),
                score: f64::from(frequency) * multiplier,
                frequency,
            }
        })
        .collect();
    scored.sort_by(ScoredGap::rank_cmp);
    scored
}

/// Orders overlap terms by job description frequency descending, then term.
pub fn sort_overlap<'a, I>(overlap: I, jd: &TermCounts) -> Vec<OverlapTerm>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut terms: Vec<OverlapTerm> = overlap
        .into_iter()
        .map(|term| OverlapTerm {
            term: term.to_string(),
            jd_frequency: jd.get(term),
        })
        .collect();
    terms.sort_by(|a, b| {
        b.jd_frequency
            .cmp(&a.jd_frequency)
            .then_with(|| a.term.cmp(&b.term))
    });
    terms
}

/// Returns the first `n` items, or all of them if there are fewer.
pub fn top_n<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(terms: &[&str]) -> TermCounts {
        TermCounts::from_terms(terms.iter().copied())
    }

    #[test]
    fn test_overlap_and_gaps() {
        let cv = counts(&["python", "flask", "apis"]);
        let jd = counts(&["python", "docker", "kubernetes", "python"]);

        let (overlap, gaps) = overlap_and_gaps(&cv, &jd);
        assert_eq!(overlap.into_iter().collect::<Vec<_>>(), vec!["python"]);
        assert_eq!(gaps.into_iter().collect::<Vec<_>>(), vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_score_gaps_orders_by_score_then_frequency_then_term() {
        let jd = counts(&["sql", "sql", "aws", "aws", "kafka", "rust", "rust"]);
        let phrases = BTreeSet::from(["kafka".to_string()]);

        let scored = score_gaps(["sql", "aws", "kafka", "rust"], &jd, &phrases, 2.0);
        let order: Vec<_> = scored.iter().map(|g| g.term.as_str()).collect();
        // All score 2.0; kafka has frequency 1 so it sorts last
        assert_eq!(order, vec!["aws", "rust", "sql", "kafka"]);
        assert!((scored[3].score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_gaps_bonus_applied() {
        let jd = counts(&["docker", "linux", "linux"]);
        let phrases = BTreeSet::from(["docker".to_string()]);

        let scored = score_gaps(["docker", "linux"], &jd, &phrases, 1.5);
        assert_eq!(scored[0].term, "linux");
        assert!((scored[0].score - 2.0).abs() < f64::EPSILON);
        assert_eq!(scored[1].term, "docker");
        assert!((scored[1].score - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_gaps_unknown_term_has_frequency_one() {
        let scored = score_gaps(["ghost"], &TermCounts::default(), &BTreeSet::new(), 1.5);
        assert_eq!(scored[0].frequency, 1);
        assert!((scored[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sort_overlap() {
        let jd = counts(&["git", "python", "python", "bash"]);
        let sorted = sort_overlap(["bash", "git", "python"], &jd);
        let order: Vec<_> = sorted
            .iter()
            .map(|o| (o.term.as_str(), o.jd_frequency))
            .collect();
        assert_eq!(order, vec![("python", 2), ("bash", 1), ("git", 1)]);
    }

    #[test]
    fn test_top_n() {
        let items = [1, 2, 3];
        assert_eq!(top_n(&items, 2), &[1, 2]);
        assert_eq!(top_n(&items, 10), &[1, 2, 3]);
        assert!(top_n(&items, 0).is_empty());
    }
}
