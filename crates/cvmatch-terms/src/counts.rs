//! Per-document term frequency tables.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

/// How often each term occurs in one document.
///
/// Built once from an extractor's output and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermCounts {
    /// Occurrences per term.
    counts: HashMap<String, u32>,
}

impl TermCounts {
    /// Counts the terms in an extractor's output.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for term in terms {
            *counts.entry(term.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns the count for a term, zero if absent.
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Returns true if the term occurs at least once.
    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Returns the set of distinct terms.
    pub fn term_set(&self) -> BTreeSet<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    /// Returns the number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if the document produced no terms.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Iterates over `(term, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Returns `(term, count)` pairs sorted by count descending, then term.
    pub fn sorted(&self) -> Vec<(&str, u32)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_terms_counts_duplicates() {
        let counts = TermCounts::from_terms(["python", "docker", "python"]);
        assert_eq!(counts.get("python"), 2);
        assert_eq!(counts.get("docker"), 1);
        assert_eq!(counts.get("rust"), 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_empty() {
        let counts = TermCounts::from_terms(Vec::<String>::new());
        assert!(counts.is_empty());
        assert!(counts.term_set().is_empty());
    }

    #[test]
    fn test_term_set_is_sorted() {
        let counts = TermCounts::from_terms(["sql", "aws", "kafka", "aws"]);
        let set: Vec<_> = counts.term_set().into_iter().collect();
        assert_eq!(set, vec!["aws", "kafka", "sql"]);
    }

    #[test]
    fn test_sorted_by_count_then_term() {
        let counts = TermCounts::from_terms(["b", "a", "c", "c", "b", "c"]);
        assert_eq!(counts.sorted(), vec![("c", 3), ("b", 2), ("a", 1)]);

        let ties = TermCounts::from_terms(["zeta", "alpha"]);
        assert_eq!(ties.sorted(), vec![("alpha", 1), ("zeta", 1)]);
    }
}
