// File: src/core/index.rs
use crate::core::types::PairwiseResult;
use std::collections::HashSet;

/// Derives the deduplicated, lexicographically sorted list of everyone
/// referenced by the results, on either side of a pairing. This is what
/// the two selector controls are populated from.
/// O(n) over the results plus a sort over the distinct names.
pub fn participant_index(results: &[PairwiseResult]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    for result in results {
        seen.insert(result.person1.as_str());
        seen.insert(result.person2.as_str());
    }

    let mut names: Vec<String> = seen.into_iter().map(str::to_string).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{PairMetrics, PairwiseResult, ScoreBreakdown};

    fn record(person1: &str, person2: &str) -> PairwiseResult {
        PairwiseResult {
            person1: person1.to_string(),
            person2: person2.to_string(),
            compatibility_score: 50.0,
            metrics: PairMetrics {
                person1_books_finished: 0,
                person2_books_finished: 0,
                shared_books_finished: 0,
                shared_authors: 0,
                cross_recommendations: 0,
                shared_tbr: 0,
                disagreements: 0,
            },
            top_shared_books: vec![],
            top_shared_authors: vec![],
            shared_tbr_sample: vec![],
            diagnosis: String::new(),
            score_breakdown: ScoreBreakdown {
                shared_finished: 0.0,
                shared_authors: 0.0,
                cross_recommendations: 0.0,
                shared_tbr: 0.0,
                reading_behavior: 0.0,
                disagreement_penalty: 0.0,
            },
        }
    }

    #[test]
    fn test_index_is_sorted_and_deduplicated() {
        let results = vec![
            record("Maya", "Alice"),
            record("Bob", "Alice"),
            record("Maya", "Bob"),
        ];
        let index = participant_index(&results);
        assert_eq!(index, vec!["Alice", "Bob", "Maya"]);
    }

    #[test]
    fn test_index_sees_both_sides_of_a_pairing() {
        let results = vec![record("Zoe", "Ada")];
        assert_eq!(participant_index(&results), vec!["Ada", "Zoe"]);
    }

    #[test]
    fn test_empty_dataset_yields_empty_index() {
        assert!(participant_index(&[]).is_empty());
    }
}
