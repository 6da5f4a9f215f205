// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Summary the analyzer writes alongside the results. `total_pairings`
/// and `average_compatibility` feed the footer of the viewer directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub generated_at: String,
    pub total_pairings: usize,
    pub average_compatibility: f64,
}

/// Per-pair overlap counts. All counts are computed by the external
/// analyzer; the viewer only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairMetrics {
    pub person1_books_finished: u32,
    pub person2_books_finished: u32,
    pub shared_books_finished: u32,
    pub shared_authors: u32,
    pub cross_recommendations: u32,
    pub shared_tbr: u32,
    pub disagreements: u32,
}

/// An author both readers have finished books by, with how many each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedAuthor {
    pub author: String,
    pub person1_count: u32,
    pub person2_count: u32,
    pub total: u32,
}

/// The weighted components that sum to the normalized score, as
/// fractions of 1.0. The disagreement penalty is the only component
/// that can be negative, and the only one the contract allows to be
/// absent; a missing penalty means none was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub shared_finished: f64,
    pub shared_authors: f64,
    pub cross_recommendations: f64,
    pub shared_tbr: f64,
    pub reading_behavior: f64,
    #[serde(default)]
    pub disagreement_penalty: f64,
}

/// One precomputed pairing. `person1`/`person2` identify the pair as an
/// unordered set: the analyzer emits each pair exactly once, in
/// whichever order it happened to process the two reading lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseResult {
    pub person1: String,
    pub person2: String,
    /// Percentage in 0-100, already rounded by the analyzer.
    pub compatibility_score: f64,
    pub metrics: PairMetrics,
    pub top_shared_books: Vec<String>,
    pub top_shared_authors: Vec<SharedAuthor>,
    pub shared_tbr_sample: Vec<String>,
    pub diagnosis: String,
    pub score_breakdown: ScoreBreakdown,
}

/// The whole input file. Read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub metadata: DatasetMetadata,
    pub results: Vec<PairwiseResult>,
}
