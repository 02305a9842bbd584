//! Burnout score engine.
//!
//! Composite 0-100 index weighted across four dimensions. Each component
//! is a pure function over the profile so monotonicity and boundary
//! behavior stay independently testable; weights are named constants.

use crate::normalize::{direct_scale, inverse_scale, ramp_above, ramp_below};
use crate::risk::ScoreBreakdown;
use crate::stress::StressLevel;
use crate::WorkProfile;

pub const EMOTIONAL_EXHAUSTION_WEIGHT: f64 = 0.35;
pub const DEPERSONALIZATION_WEIGHT: f64 = 0.25;
pub const REDUCED_ACCOMPLISHMENT_WEIGHT: f64 = 0.20;
pub const WORK_OVERLOAD_WEIGHT: f64 = 0.20;

/// Numeric reading of the classifier's label inside the exhaustion
/// component.
fn stress_factor(level: StressLevel) -> f64 {
    match level {
        StressLevel::Low => 25.0,
        StressLevel::Medium => 50.0,
        StressLevel::High => 75.0,
        StressLevel::Critical => 100.0,
    }
}

/// Emotional exhaustion: long weeks and short nights, softened by
/// work-life balance, with the stress label blended in. Rises with
/// work hours, falls with sleep and balance.
pub fn emotional_exhaustion(p: &WorkProfile, stress: StressLevel) -> f64 {
    let hours = ramp_above(p.work_hours_per_week, 40.0, 5.0);
    let sleep = ramp_below(p.sleep_hours_per_day, 7.5, 15.0);
    let balance = inverse_scale(p.work_life_balance);
    (hours * 0.3 + sleep * 0.25 + balance * 0.25 + stress_factor(stress) * 0.2).clamp(0.0, 100.0)
}

/// Depersonalization: meeting and email churn against thin team support.
pub fn depersonalization(p: &WorkProfile) -> f64 {
    let meetings = ramp_above(p.meetings_per_week, 10.0, 4.0);
    let emails = ramp_above(p.emails_per_day, 50.0, 0.5);
    let support = inverse_scale(p.team_support);
    (support * 0.4 + meetings * 0.3 + emails * 0.3).clamp(0.0, 100.0)
}

/// Reduced personal accomplishment: inverse of team support and
/// work-life balance.
pub fn reduced_accomplishment(p: &WorkProfile) -> f64 {
    (inverse_scale(p.team_support) * 0.5 + inverse_scale(p.work_life_balance) * 0.5)
        .clamp(0.0, 100.0)
}

/// Work overload: deadline pressure, task complexity, and hours beyond a
/// 40h week.
pub fn work_overload(p: &WorkProfile) -> f64 {
    let pressure = direct_scale(p.deadline_pressure);
    let complexity = direct_scale(p.task_complexity);
    let hours = ramp_above(p.work_hours_per_week, 40.0, 3.0);
    (pressure * 0.4 + complexity * 0.3 + hours * 0.3).clamp(0.0, 100.0)
}

/// Composite burnout score for a profile and its classified stress label.
pub fn calculate_burnout(p: &WorkProfile, stress: StressLevel) -> ScoreBreakdown {
    ScoreBreakdown::from_components(vec![
        (
            "emotional_exhaustion",
            emotional_exhaustion(p, stress),
            EMOTIONAL_EXHAUSTION_WEIGHT,
        ),
        (
            "depersonalization",
            depersonalization(p),
            DEPERSONALIZATION_WEIGHT,
        ),
        (
            "reduced_accomplishment",
            reduced_accomplishment(p),
            REDUCED_ACCOMPLISHMENT_WEIGHT,
        ),
        ("work_overload", work_overload(p), WORK_OVERLOAD_WEIGHT),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskBand;

    fn profile(work: f64, sleep: f64, balance: f64) -> WorkProfile {
        WorkProfile {
            work_hours_per_week: work,
            sleep_hours_per_day: sleep,
            work_life_balance: balance,
            ..WorkProfile::default()
        }
    }

    #[test]
    fn exhaustion_rises_with_hours_and_falls_with_sleep() {
        let base = emotional_exhaustion(&profile(45.0, 7.0, 5.0), StressLevel::Medium);
        let longer = emotional_exhaustion(&profile(55.0, 7.0, 5.0), StressLevel::Medium);
        let rested = emotional_exhaustion(&profile(45.0, 9.0, 5.0), StressLevel::Medium);
        assert!(longer > base);
        assert!(rested <= base);
    }

    #[test]
    fn components_stay_in_bounds_on_garbage_input() {
        let wild = WorkProfile {
            work_hours_per_week: 400.0,
            sleep_hours_per_day: -3.0,
            meetings_per_week: 1000.0,
            emails_per_day: 1e6,
            deadline_pressure: 40.0,
            task_complexity: -7.0,
            team_support: 99.0,
            work_life_balance: -1.0,
        };
        for score in [
            emotional_exhaustion(&wild, StressLevel::Critical),
            depersonalization(&wild),
            reduced_accomplishment(&wild),
            work_overload(&wild),
        ] {
            assert!((0.0..=100.0).contains(&score));
        }
        let total = calculate_burnout(&wild, StressLevel::Critical).total;
        assert!((0.0..=100.0).contains(&total));
    }

    #[test]
    fn healthy_profile_lands_in_the_low_band() {
        let healthy = WorkProfile {
            work_hours_per_week: 38.0,
            sleep_hours_per_day: 8.0,
            meetings_per_week: 8.0,
            emails_per_day: 30.0,
            deadline_pressure: 2.0,
            task_complexity: 3.0,
            team_support: 9.0,
            work_life_balance: 9.0,
        };
        let result = calculate_burnout(&healthy, StressLevel::Low);
        assert_eq!(result.band, RiskBand::Low);
        assert!(result.total < 30.0);
    }
}
