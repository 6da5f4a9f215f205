// File: src/dataset.rs
use crate::core::types::Dataset;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// A dataset that cannot be loaded is a fatal startup condition. The
/// two variants keep "the file was unreadable" apart from "the file
/// does not match the analyzer's contract" in the startup message.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset file does not match the expected structure: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and deserializes the analyzer's JSON output. Field names and
/// nesting are the contract; any structural deviation surfaces as a
/// `Parse` error here rather than a bad render later.
pub fn load_from_disk(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset: Dataset = serde_json::from_reader(reader)?;

    warn_on_duplicate_pairs(&dataset);
    tracing::info!(
        pairings = dataset.results.len(),
        generated_at = %dataset.metadata.generated_at,
        "dataset loaded"
    );
    Ok(dataset)
}

/// The analyzer emits each unordered pair at most once. Lookup stays
/// correct on a violating file (first match wins), so a duplicate gets
/// a warning, not a refusal to load.
fn warn_on_duplicate_pairs(dataset: &Dataset) {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for result in &dataset.results {
        let mut key = (result.person1.as_str(), result.person2.as_str());
        if key.0 > key.1 {
            key = (key.1, key.0);
        }
        if !seen.insert(key) {
            tracing::warn!(
                person1 = %result.person1,
                person2 = %result.person2,
                "duplicate pairing in dataset"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOCUMENT: &str = r#"{
        "metadata": {
            "generated_at": "2025-07-14T18:02:11.123456",
            "total_pairings": 1,
            "average_compatibility": 82.0
        },
        "results": [
            {
                "person1": "Alice",
                "person2": "Bob",
                "compatibility_score": 82.0,
                "metrics": {
                    "person1_books_finished": 40,
                    "person2_books_finished": 25,
                    "shared_books_finished": 12,
                    "shared_authors": 5,
                    "cross_recommendations": 8,
                    "shared_tbr": 3,
                    "disagreements": 2
                },
                "top_shared_books": ["Project Hail Mary", "Piranesi"],
                "top_shared_authors": [
                    {"author": "Ursula K. Le Guin", "person1_count": 3, "person2_count": 2, "total": 5}
                ],
                "shared_tbr_sample": ["The Dispossessed"],
                "diagnosis": "🌟 EXCELLENT COMPATIBILITY (82.0%) Strong overlap with 12 shared books.",
                "score_breakdown": {
                    "shared_finished": 0.35,
                    "shared_authors": 0.248,
                    "cross_recommendations": 0.1,
                    "shared_tbr": 0.082,
                    "reading_behavior": 0.04,
                    "disagreement_penalty": -0.04
                }
            }
        ]
    }"#;

    #[test]
    fn test_provider_document_parses_into_the_model() {
        let dataset: Dataset = serde_json::from_str(FULL_DOCUMENT).expect("contract document");

        assert_eq!(dataset.metadata.total_pairings, 1);
        let result = &dataset.results[0];
        assert_eq!(result.person1, "Alice");
        assert_eq!(result.metrics.shared_books_finished, 12);
        assert_eq!(result.top_shared_authors[0].total, 5);
        assert_eq!(result.score_breakdown.disagreement_penalty, -0.04);
    }

    #[test]
    fn test_structural_deviation_fails_to_parse() {
        // A record without its second participant violates the contract.
        let broken = FULL_DOCUMENT.replace("\"person2\": \"Bob\",", "");
        assert!(serde_json::from_str::<Dataset>(&broken).is_err());
    }

    #[test]
    fn test_five_component_breakdown_defaults_the_penalty_to_zero() {
        // Drop the penalty key entirely; the other five stay required.
        let five = FULL_DOCUMENT.replace(",\n                    \"disagreement_penalty\": -0.04", "");
        assert!(!five.contains("disagreement_penalty"));
        let dataset: Dataset = serde_json::from_str(&five).expect("five-component document");
        assert_eq!(dataset.results[0].score_breakdown.disagreement_penalty, 0.0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_from_disk(Path::new("no_such_directory/compatibility_results.json"))
            .expect_err("missing file must not load");
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
