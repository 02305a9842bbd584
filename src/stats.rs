//! Dataset-wide statistics used as benchmarking context by the
//! explanation renderer. Pure aggregation; an empty record set yields
//! zeroed statistics rather than an error.

use serde::{Deserialize, Serialize};

use crate::dataset::EmployeeRecord;
use crate::stress::StressLevel;

/// Burnout score above which a record counts as high-risk.
pub const HIGH_RISK_BURNOUT: f64 = 70.0;

/// Count and share of one stress level within the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelShare {
    pub level: StressLevel,
    pub count: usize,
    /// Percent of the dataset, rounded to one decimal.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub total: usize,
    /// One entry per stress level, in ascending severity.
    pub stress_distribution: Vec<LevelShare>,
    pub mean_burnout: f64,
    pub high_risk_count: usize,
    pub high_risk_percentage: f64,
}

/// Percentage rounded to one decimal place (half away from zero).
fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 * 1000.0 / total as f64).round() / 10.0
    }
}

pub fn compute_statistics(records: &[EmployeeRecord]) -> DatasetStatistics {
    let total = records.len();

    let stress_distribution = StressLevel::ALL
        .iter()
        .map(|&level| {
            let count = records.iter().filter(|r| r.stress_level == level).count();
            LevelShare {
                level,
                count,
                percentage: pct(count, total),
            }
        })
        .collect();

    let mean_burnout = if total == 0 {
        0.0
    } else {
        records.iter().map(|r| r.burnout_score).sum::<f64>() / total as f64
    };

    let high_risk_count = records
        .iter()
        .filter(|r| r.burnout_score > HIGH_RISK_BURNOUT)
        .count();

    DatasetStatistics {
        total,
        stress_distribution,
        mean_burnout,
        high_risk_count,
        high_risk_percentage: pct(high_risk_count, total),
    }
}
