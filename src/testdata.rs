//! Test data generators for integration tests and benchmarks.

use crate::dataset::EmployeeRecord;
use crate::stress::StressLevel;

/// A valid record with sensible mid-range metrics.
pub fn record(id: &str, stress_level: StressLevel, burnout_score: f64) -> EmployeeRecord {
    EmployeeRecord {
        employee_id: id.to_string(),
        work_hours_per_week: 45.0,
        sleep_hours_per_day: 7.0,
        meetings_per_week: 15.0,
        emails_per_day: 75.0,
        deadline_pressure: 5.0,
        task_complexity: 5.0,
        team_support: 5.0,
        work_life_balance: 5.0,
        stress_level,
        burnout_score,
        outcome: "Monitoring: Regular check-ins scheduled".to_string(),
    }
}

/// Deterministic synthetic workforce: metrics cycle through their ranges
/// so every stress level and burnout band shows up.
pub fn synthetic_workforce(n: usize) -> Vec<EmployeeRecord> {
    (0..n)
        .map(|i| {
            let phase = (i % 10) as f64;
            let burnout_score = (phase * 11.0).min(100.0);
            let stress_level = match i % 4 {
                0 => StressLevel::Low,
                1 => StressLevel::Medium,
                2 => StressLevel::High,
                _ => StressLevel::Critical,
            };
            let outcome = if burnout_score > 70.0 {
                "Intervention: Workload reduced, improved after 3 months"
            } else if burnout_score > 50.0 {
                "Monitoring: Regular check-ins scheduled"
            } else {
                "Healthy: Continuing normal work pattern"
            };
            EmployeeRecord {
                employee_id: format!("EMP{:04}", i + 1),
                work_hours_per_week: 30.0 + phase * 5.0,
                sleep_hours_per_day: 4.0 + phase * 0.5,
                meetings_per_week: 5.0 + phase * 3.0,
                emails_per_day: 20.0 + phase * 18.0,
                deadline_pressure: 1.0 + phase.min(9.0),
                task_complexity: 1.0 + ((i % 7) as f64).min(9.0),
                team_support: 1.0 + ((i % 9) as f64).min(9.0),
                work_life_balance: 10.0 - phase.min(9.0),
                stress_level,
                burnout_score,
                outcome: outcome.to_string(),
            }
        })
        .collect()
}
