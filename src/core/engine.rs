use crate::core::index::participant_index;
use crate::core::lookup::{find_pair, LookupOutcome};
use crate::core::types::{Dataset, DatasetMetadata, PairwiseResult};
use crate::dataset::{load_from_disk, DatasetError};
use std::cmp::Ordering;
use std::path::Path;

// The viewer engine is what the binaries drive. It owns the immutable
// dataset, the participant index derived from it once, and the two
// selector values. Every query is cheap and recomputed on demand.
pub struct ViewerEngine {
    dataset: Dataset,
    participants: Vec<String>,
    first: Option<String>,
    second: Option<String>,
}

impl ViewerEngine {
    pub fn new(dataset: Dataset) -> Self {
        let participants = participant_index(&dataset.results);
        Self {
            dataset,
            participants,
            first: None,
            second: None,
        }
    }

    /// Loads the dataset file and builds the engine around it. A file
    /// that cannot be read or parsed is a fatal startup condition, so
    /// there is no fallback to an empty engine.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let dataset = load_from_disk(path)?;
        Ok(Self::new(dataset))
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn metadata(&self) -> &DatasetMetadata {
        &self.dataset.metadata
    }

    pub fn first_selected(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn second_selected(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// Puts a name into the first selector. A name already held by the
    /// other selector is rejected, so the selection is always either
    /// incomplete or a valid distinct pair. Returns whether the pick
    /// was applied.
    pub fn select_first(&mut self, name: &str) -> bool {
        if self.second.as_deref() == Some(name) {
            return false;
        }
        tracing::debug!(reader = %name, slot = "first", "reader selected");
        self.first = Some(name.to_string());
        true
    }

    /// Counterpart of `select_first` for the second selector.
    pub fn select_second(&mut self, name: &str) -> bool {
        if self.first.as_deref() == Some(name) {
            return false;
        }
        tracing::debug!(reader = %name, slot = "second", "reader selected");
        self.second = Some(name.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.first = None;
        self.second = None;
    }

    /// Recomputes the lookup from the live selection. Called on every
    /// render; nothing is cached between selection changes because the
    /// scan is cheap and idempotent.
    pub fn current(&self) -> LookupOutcome<'_> {
        let first = self.first.as_deref().unwrap_or("");
        let second = self.second.as_deref().unwrap_or("");
        find_pair(&self.dataset.results, first, second)
    }

    /// Looks up an arbitrary pair of names, independent of the
    /// selector state.
    pub fn lookup(&self, a: &str, b: &str) -> LookupOutcome<'_> {
        find_pair(&self.dataset.results, a, b)
    }

    /// The n best pairings, highest score first. The analyzer sorts its
    /// output file, but the file order is not trusted here.
    pub fn top_matches(&self, n: usize) -> Vec<&PairwiseResult> {
        let mut ranked: Vec<&PairwiseResult> = self.dataset.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }
}
