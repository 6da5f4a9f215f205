// File: src/core/lookup.rs
use crate::core::types::PairwiseResult;

/// Outcome of a pair lookup. The two non-success states are distinct on
/// purpose: an incomplete or self-referential selection never touches
/// the dataset, while "not found" means a valid pair simply has no
/// record. The UI shows different copy for each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome<'a> {
    /// A name was missing, or both selectors held the same name.
    NoSelection,
    /// A valid distinct pair with no record in the dataset. This is an
    /// expected state of the data, not a fault.
    NotFound,
    Found(&'a PairwiseResult),
}

impl<'a> LookupOutcome<'a> {
    pub fn record(&self) -> Option<&'a PairwiseResult> {
        match self {
            LookupOutcome::Found(result) => Some(result),
            _ => None,
        }
    }
}

/// Finds the record for an unordered pair of names: a record matches if
/// its two participants are exactly {a, b}, in either order.
/// Linear scan; the dataset carries each unordered pair at most once,
/// so the first hit is the only one.
pub fn find_pair<'a>(results: &'a [PairwiseResult], a: &str, b: &str) -> LookupOutcome<'a> {
    if a.is_empty() || b.is_empty() || a == b {
        return LookupOutcome::NoSelection;
    }

    for result in results {
        let straight = result.person1 == a && result.person2 == b;
        let flipped = result.person1 == b && result.person2 == a;
        if straight || flipped {
            return LookupOutcome::Found(result);
        }
    }

    LookupOutcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{PairMetrics, ScoreBreakdown};

    fn record(person1: &str, person2: &str, score: f64) -> PairwiseResult {
        PairwiseResult {
            person1: person1.to_string(),
            person2: person2.to_string(),
            compatibility_score: score,
            metrics: PairMetrics {
                person1_books_finished: 40,
                person2_books_finished: 25,
                shared_books_finished: 12,
                shared_authors: 5,
                cross_recommendations: 8,
                shared_tbr: 3,
                disagreements: 2,
            },
            top_shared_books: vec!["Project Hail Mary".to_string()],
            top_shared_authors: vec![],
            shared_tbr_sample: vec![],
            diagnosis: String::new(),
            score_breakdown: ScoreBreakdown {
                shared_finished: 0.3,
                shared_authors: 0.2,
                cross_recommendations: 0.05,
                shared_tbr: 0.1,
                reading_behavior: 0.03,
                disagreement_penalty: 0.0,
            },
        }
    }

    #[test]
    fn test_lookup_matches_in_either_order() {
        let results = vec![record("Alice", "Bob", 82.0)];

        let ab = find_pair(&results, "Alice", "Bob");
        let ba = find_pair(&results, "Bob", "Alice");

        let ab = ab.record().expect("Alice/Bob should be found");
        let ba = ba.record().expect("Bob/Alice should be found");
        // Symmetric lookups must land on the identical record.
        assert!(std::ptr::eq(ab, ba));
        assert_eq!(ab.compatibility_score, 82.0);
    }

    #[test]
    fn test_same_name_is_no_selection() {
        let results = vec![record("Alice", "Alice", 100.0)];
        // Even a (bogus) self-pairing record must not be reachable.
        assert_eq!(
            find_pair(&results, "Alice", "Alice"),
            LookupOutcome::NoSelection
        );
    }

    #[test]
    fn test_empty_name_is_no_selection() {
        let results = vec![record("Alice", "Bob", 82.0)];
        assert_eq!(find_pair(&results, "Alice", ""), LookupOutcome::NoSelection);
        assert_eq!(find_pair(&results, "", "Bob"), LookupOutcome::NoSelection);
    }

    #[test]
    fn test_unrecorded_pair_is_not_found() {
        let results = vec![record("Alice", "Bob", 82.0)];
        assert_eq!(
            find_pair(&results, "Alice", "Carol"),
            LookupOutcome::NotFound
        );
    }

    #[test]
    fn test_empty_dataset_is_not_found_for_any_valid_pair() {
        assert_eq!(find_pair(&[], "Alice", "Bob"), LookupOutcome::NotFound);
    }

    #[test]
    fn test_first_match_wins_on_duplicate_data() {
        let results = vec![record("Alice", "Bob", 82.0), record("Bob", "Alice", 10.0)];
        let found = find_pair(&results, "Alice", "Bob").record().unwrap();
        assert_eq!(found.compatibility_score, 82.0);
    }
}
