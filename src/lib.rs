//! Workforce wellbeing risk analytics.
//!
//! Computes burnout and phishing-susceptibility indices from self-reported
//! work metrics and retrieves the most comparable historical cases from a
//! read-only dataset. The stress classifier itself is external; it enters
//! through the [`stress::StressModel`] trait. [`report::analyze`] runs the
//! whole pipeline and bundles the structured results for the downstream
//! explanation renderer.

pub mod burnout;
pub mod dataset;
pub mod normalize;
pub mod phishing;
pub mod report;
pub mod risk;
pub mod similarity;
pub mod stats;
pub mod stress;
pub mod testdata;

use serde::{Deserialize, Serialize};

/// Self-reported work metrics for the employee under analysis.
///
/// Counts and rates are free-form non-negative numbers; the four rating
/// fields use a 1-10 scale. The engines clamp out-of-range values instead
/// of rejecting them, since upstream form data is noisy; strict validation
/// happens only at the dataset load boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkProfile {
    pub work_hours_per_week: f64,
    pub sleep_hours_per_day: f64,
    pub meetings_per_week: f64,
    pub emails_per_day: f64,
    pub deadline_pressure: f64,
    pub task_complexity: f64,
    pub team_support: f64,
    pub work_life_balance: f64,
}

impl Default for WorkProfile {
    fn default() -> Self {
        Self {
            work_hours_per_week: 40.0,
            sleep_hours_per_day: 7.0,
            meetings_per_week: 15.0,
            emails_per_day: 75.0,
            deadline_pressure: 5.0,
            task_complexity: 5.0,
            team_support: 5.0,
            work_life_balance: 5.0,
        }
    }
}

pub use burnout::calculate_burnout;
pub use dataset::{DatasetError, DatasetStore, EmployeeRecord, LoadSummary};
pub use phishing::{calculate_vulnerability, PhishingAssessment};
pub use report::{analyze, AnalysisReport};
pub use risk::{RiskBand, ScoreBreakdown};
pub use similarity::{find_similar, SimilarityError, SimilarityResult};
pub use stats::{compute_statistics, DatasetStatistics};
pub use stress::{LinearStressModel, StressLevel, StressModel, StressPrediction};
