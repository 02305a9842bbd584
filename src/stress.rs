//! Stress level classification seam.
//!
//! The production classifier is an external model treated as a black box;
//! [`StressModel`] is its boundary. [`LinearStressModel`] is a weighted
//! linear reference implementation used as a default and in tests.

use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

use crate::WorkProfile;

/// Categorical stress label shared by the classifier, the historical
/// records, and the statistics aggregator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StressLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl StressLevel {
    /// All levels in ascending severity, for deterministic iteration.
    pub const ALL: [StressLevel; 4] = [
        StressLevel::Low,
        StressLevel::Medium,
        StressLevel::High,
        StressLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
            StressLevel::Critical => "Critical",
        }
    }

    /// Case-insensitive parse of a label as it appears in dataset rows.
    pub fn parse(s: &str) -> Option<StressLevel> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(StressLevel::Low),
            "medium" => Some(StressLevel::Medium),
            "high" => Some(StressLevel::High),
            "critical" => Some(StressLevel::Critical),
            _ => None,
        }
    }
}

/// Classifier output: the label plus how sure the model is about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressPrediction {
    pub stress_level: StressLevel,
    /// In (0, 1]; 0.5 means the score sits exactly on a bin edge.
    pub confidence: f64,
    /// Unbinned score, useful for diagnostics.
    pub raw_score: f64,
}

/// Boundary trait for stress classifiers.
pub trait StressModel {
    fn name(&self) -> &str;
    fn predict(&self, profile: &WorkProfile) -> StressPrediction;
}

/// Weighted linear stress model binned into the four levels.
///
/// Weights follow the relationship the production classifier was trained
/// on: workload and pressure push the score up, support and balance pull
/// it down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearStressModel {
    pub model_name: String,
    pub work_hours_weight: f64,
    pub sleep_deficit_weight: f64,
    pub meetings_weight: f64,
    pub emails_weight: f64,
    pub deadline_weight: f64,
    pub complexity_weight: f64,
    pub support_weight: f64,
    pub balance_weight: f64,
}

impl Default for LinearStressModel {
    fn default() -> Self {
        Self {
            model_name: "linear-stress-v1".to_string(),
            work_hours_weight: 0.5,
            sleep_deficit_weight: 5.0,
            meetings_weight: 0.3,
            emails_weight: 0.05,
            deadline_weight: 3.0,
            complexity_weight: 2.0,
            support_weight: 2.0,
            balance_weight: 2.0,
        }
    }
}

/// Bin edges between Low/Medium/High/Critical.
const BIN_EDGES: [f64; 3] = [20.0, 40.0, 60.0];

impl LinearStressModel {
    /// Unbinned stress score. Hours count above a 40h week, sleep as the
    /// deficit under 8h.
    pub fn raw_score(&self, p: &WorkProfile) -> f64 {
        (p.work_hours_per_week - 40.0) * self.work_hours_weight
            + (8.0 - p.sleep_hours_per_day) * self.sleep_deficit_weight
            + p.meetings_per_week * self.meetings_weight
            + p.emails_per_day * self.emails_weight
            + p.deadline_pressure * self.deadline_weight
            + p.task_complexity * self.complexity_weight
            - p.team_support * self.support_weight
            - p.work_life_balance * self.balance_weight
    }

    pub fn load_model(
        path: impl AsRef<std::path::Path>,
    ) -> Result<LinearStressModel, serde_json::Error> {
        let s = read_to_string(path).map_err(serde_json::Error::io)?;
        serde_json::from_str::<LinearStressModel>(&s)
    }
}

impl StressModel for LinearStressModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn predict(&self, profile: &WorkProfile) -> StressPrediction {
        let raw_score = self.raw_score(profile);
        StressPrediction {
            stress_level: bin_level(raw_score),
            confidence: bin_confidence(raw_score),
            raw_score,
        }
    }
}

fn bin_level(score: f64) -> StressLevel {
    if score <= BIN_EDGES[0] {
        StressLevel::Low
    } else if score <= BIN_EDGES[1] {
        StressLevel::Medium
    } else if score <= BIN_EDGES[2] {
        StressLevel::High
    } else {
        StressLevel::Critical
    }
}

/// Logistic transform of the distance to the nearest bin edge: 0.5 on an
/// edge, approaching 1 deep inside a bin.
fn bin_confidence(score: f64) -> f64 {
    let margin = BIN_EDGES
        .iter()
        .map(|edge| (score - edge).abs())
        .fold(f64::INFINITY, f64::min);
    1.0 / (1.0 + (-margin / 10.0).exp())
}
