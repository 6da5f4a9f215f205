// File: src/render.rs
// Pure presentation helpers. Everything here is deterministic string
// and row assembly from already-validated data; terminal I/O and color
// stay in the binaries.
use crate::core::types::{PairMetrics, ScoreBreakdown};

/// Shown when a selector is empty or both hold the same reader.
pub const NO_SELECTION_MSG: &str = "Pick two different readers to compare their shelves.";
/// Shown when a valid distinct pair has no record in the dataset.
pub const NOT_FOUND_MSG: &str = "No compatibility data found for this pair.";

/// Qualitative band for a 0-100 score. The thresholds mirror the bands
/// the analyzer uses in its diagnosis text; the viewer only uses them
/// to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLevel {
    Excellent,
    Good,
    Moderate,
    Low,
    Minimal,
}

pub fn score_level(score: f64) -> ScoreLevel {
    if score >= 70.0 {
        ScoreLevel::Excellent
    } else if score >= 50.0 {
        ScoreLevel::Good
    } else if score >= 30.0 {
        ScoreLevel::Moderate
    } else if score >= 15.0 {
        ScoreLevel::Low
    } else {
        ScoreLevel::Minimal
    }
}

/// One of the four summary tiles under the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: u32,
}

pub fn metric_tiles(metrics: &PairMetrics) -> [MetricTile; 4] {
    [
        MetricTile { label: "Shared books", value: metrics.shared_books_finished },
        MetricTile { label: "Shared authors", value: metrics.shared_authors },
        MetricTile { label: "Recommendations", value: metrics.cross_recommendations },
        MetricTile { label: "Shared TBR", value: metrics.shared_tbr },
    ]
}

/// One labelled row of the score-breakdown table, holding the raw
/// fraction so callers can color negatives before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub fraction: f64,
}

/// The weighted components in display order. The disagreement-penalty
/// row only appears when the penalty is nonzero.
pub fn breakdown_rows(breakdown: &ScoreBreakdown) -> Vec<BreakdownRow> {
    let mut rows = vec![
        BreakdownRow { label: "Shared finished books", fraction: breakdown.shared_finished },
        BreakdownRow { label: "Shared authors", fraction: breakdown.shared_authors },
        BreakdownRow { label: "Cross recommendations", fraction: breakdown.cross_recommendations },
        BreakdownRow { label: "Shared TBR", fraction: breakdown.shared_tbr },
        BreakdownRow { label: "Reading behavior", fraction: breakdown.reading_behavior },
    ];
    if breakdown.disagreement_penalty != 0.0 {
        rows.push(BreakdownRow {
            label: "Disagreement penalty",
            fraction: breakdown.disagreement_penalty,
        });
    }
    rows
}

/// Formats a breakdown fraction as a one-decimal percentage:
/// 0.231 -> "23.1%", -0.05 -> "-5.0%".
pub fn format_fraction(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Formats the already-0-100 compatibility score: 82.0 -> "82.0%".
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score)
}
