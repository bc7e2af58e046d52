//! Pipeline properties over realistic inputs.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::collections::BTreeSet;

use cvmatch_analysis::{MatchAnalysis, analyze, overlap_and_gaps, score_gaps, top_n};
use cvmatch_terms::{DEFAULT_PHRASES, SimpleTokenizer, Stopwords, TermCounts, find_phrases};

/// Phrase bonus used throughout.
const BONUS: f64 = 1.5;

const CV: &str = "\
Backend engineer. Built REST APIs in Python with Flask and FastAPI.
Wrote pytest suites, maintained PostgreSQL schemas and SQL reports.
Automated deployments with GitHub Actions. Comfortable on Linux.";

const JD: &str = "\
We are hiring a backend engineer to build Python services.
You will own CI/CD pipelines, Docker images and Kubernetes deployments.
Strong SQL, Kafka and AWS experience. Kafka streaming is a plus.
Unit testing and code review are part of the job.";

fn run(cv: &str, jd: &str) -> MatchAnalysis {
    analyze(
        cv,
        jd,
        &SimpleTokenizer::default(),
        DEFAULT_PHRASES,
        BONUS,
    )
}

fn terms<'a>(iter: impl Iterator<Item = &'a str>) -> BTreeSet<&'a str> {
    iter.collect()
}

#[test]
fn overlap_and_gaps_partition_the_job_terms() {
    let analysis = run(CV, JD);
    let overlap = terms(analysis.overlap.iter().map(|o| o.term.as_str()));
    let gaps = terms(analysis.gaps.iter().map(|g| g.term.as_str()));
    let jd = analysis.jd_counts.term_set();
    let cv = analysis.cv_counts.term_set();

    assert!(overlap.is_disjoint(&gaps));
    assert_eq!(overlap.union(&gaps).copied().collect::<BTreeSet<_>>(), jd);
    assert!(overlap.is_subset(&cv));
    assert!(gaps.iter().all(|g| !cv.contains(g)));
}

#[test]
fn identical_inputs_give_identical_orderings() {
    let first = run(CV, JD);
    let second = run(CV, JD);
    assert_eq!(first.gaps, second.gaps);
    assert_eq!(first.overlap, second.overlap);
}

#[test]
fn gaps_are_sorted_by_rank() {
    let analysis = run(CV, JD);
    for pair in analysis.gaps.windows(2) {
        assert!(pair[0].rank_cmp(&pair[1]).is_le());
    }
    for pair in analysis.overlap.windows(2) {
        assert!(
            pair[0].jd_frequency > pair[1].jd_frequency
                || (pair[0].jd_frequency == pair[1].jd_frequency && pair[0].term < pair[1].term)
        );
    }
}

#[test]
fn higher_frequency_scores_higher_without_bonus() {
    let jd = TermCounts::from_terms(["kafka", "kafka", "kafka", "aws"]);
    let scored = score_gaps(["aws", "kafka"], &jd, &BTreeSet::new(), BONUS);
    assert_eq!(scored[0].term, "kafka");
    assert!(scored[0].score > scored[1].score);
}

#[test]
fn phrase_bonus_never_lowers_a_score() {
    let jd = TermCounts::from_terms(["docker", "docker", "helm"]);
    let none = score_gaps(["docker", "helm"], &jd, &BTreeSet::new(), 1.5);
    let phrases = BTreeSet::from(["docker".to_string(), "helm".to_string()]);
    let boosted = score_gaps(["docker", "helm"], &jd, &phrases, 1.5);

    for gap in &none {
        let after = boosted.iter().find(|g| g.term == gap.term).unwrap();
        assert!(after.score >= gap.score);
    }
}

#[test]
fn truncation_is_a_prefix() {
    let analysis = run(CV, JD);
    for n in [0, 1, 3, analysis.gaps.len(), analysis.gaps.len() + 5] {
        let top = top_n(&analysis.gaps, n);
        assert_eq!(top.len(), n.min(analysis.gaps.len()));
        assert_eq!(top, &analysis.gaps[..top.len()]);
    }
}

#[test]
fn phrase_detected_despite_tokenization() {
    let found = find_phrases("Experience with CI/CD pipelines", DEFAULT_PHRASES);
    assert!(found.contains("ci/cd"));

    let analysis = run(CV, JD);
    let ci = analysis.gaps.iter().find(|g| g.term == "ci/cd").unwrap();
    assert!((ci.score - 1.5).abs() < f64::EPSILON);
}

#[test]
fn repeated_job_terms_outrank_single_mentions() {
    let analysis = run(CV, JD);
    let kafka = analysis.gaps.iter().position(|g| g.term == "kafka").unwrap();
    let aws = analysis.gaps.iter().position(|g| g.term == "aws").unwrap();
    assert!(kafka < aws);
}

#[test]
fn stopwords_shrink_both_sides_consistently() {
    let tokenizer = SimpleTokenizer::new(Stopwords::english(), 3);
    let analysis = analyze(CV, JD, &tokenizer, DEFAULT_PHRASES, BONUS);
    assert!(!analysis.gaps.iter().any(|g| g.term == "the" || g.term == "and"));
    assert!(!analysis.overlap.iter().any(|o| o.term == "and"));
    assert!(analysis.overlap.iter().any(|o| o.term == "python"));
}

#[test]
fn empty_job_description_has_no_gaps() {
    let analysis = run(CV, "");
    assert!(analysis.gaps.is_empty());
    assert_eq!(analysis.summary().jd_unique, 0);

    let cv = TermCounts::from_terms(["python"]);
    let empty = TermCounts::default();
    let (overlap, gaps) = overlap_and_gaps(&cv, &empty);
    assert!(overlap.is_empty() && gaps.is_empty());
}

#[test]
fn analysis_serializes_to_json() {
    let analysis = run(CV, JD);
    let value = serde_json::to_value(&analysis).unwrap();
    assert!(value["gaps"].is_array());
    assert_eq!(value["jd_counts"]["kafka"], 2);
    assert!(value["jd_phrases"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p == "docker"));
}
