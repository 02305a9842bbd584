//! Similar-case retrieval: exhaustive top-k over the historical records.
//!
//! The dataset stays small (tens to low thousands of rows), so every
//! record is compared; no index structure. Distance is the mean symmetric
//! normalized difference over a fixed feature set, mapped into (0, 1] via
//! `1 / (1 + distance)`.

use serde::Serialize;
use thiserror::Error;

use crate::dataset::EmployeeRecord;
use crate::normalize::symmetric_diff;
use crate::WorkProfile;

/// Features entering the comparison, fixed so results are reproducible.
/// team_support and work_life_balance are deliberately excluded: they
/// describe perception rather than workload shape.
pub const COMPARED_FEATURES: [&str; 6] = [
    "work_hours_per_week",
    "sleep_hours_per_day",
    "meetings_per_week",
    "emails_per_day",
    "deadline_pressure",
    "task_complexity",
];

pub const DEFAULT_K: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("k must be at least 1")]
    InvalidK,
}

/// One retrieved case: the matched record, its similarity, and its rank
/// (1-based, descending similarity).
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult<'a> {
    pub record: &'a EmployeeRecord,
    /// In (0, 1]; 1 means identical on all compared features.
    pub similarity: f64,
    pub rank: usize,
}

// Metrics are non-negative by definition; noisy inputs are clamped here
// the same way the score engines clamp them, which keeps the symmetric
// difference (and therefore similarity) inside its documented bounds.
fn features_of(p: &WorkProfile) -> [f64; 6] {
    [
        p.work_hours_per_week.max(0.0),
        p.sleep_hours_per_day.max(0.0),
        p.meetings_per_week.max(0.0),
        p.emails_per_day.max(0.0),
        p.deadline_pressure.max(0.0),
        p.task_complexity.max(0.0),
    ]
}

/// Mean symmetric normalized difference over the compared features.
/// Equal feature weights; a feature where both sides read zero
/// contributes nothing.
pub fn composite_distance(a: &WorkProfile, b: &WorkProfile) -> f64 {
    let fa = features_of(a);
    let fb = features_of(b);
    fa.iter()
        .zip(fb.iter())
        .map(|(&x, &y)| symmetric_diff(x, y))
        .sum::<f64>()
        / fa.len() as f64
}

/// Distance mapped into (0, 1], strictly decreasing; exactly 1 only when
/// every compared feature matches.
pub fn similarity(a: &WorkProfile, b: &WorkProfile) -> f64 {
    1.0 / (1.0 + composite_distance(a, b))
}

/// Top-k most similar records, descending by similarity, ties kept in
/// dataset order. An empty record set returns an empty Vec; k beyond the
/// dataset size degrades to all records; k = 0 is rejected.
pub fn find_similar<'a>(
    query: &WorkProfile,
    records: &'a [EmployeeRecord],
    k: usize,
) -> Result<Vec<SimilarityResult<'a>>, SimilarityError> {
    if k == 0 {
        return Err(SimilarityError::InvalidK);
    }

    let mut scored: Vec<(usize, f64)> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| (idx, similarity(query, &record.profile())))
        .collect();
    // sort_by is stable, so equal scores keep dataset order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(i, (idx, score))| SimilarityResult {
            record: &records[idx],
            similarity: score,
            rank: i + 1,
        })
        .collect())
}
