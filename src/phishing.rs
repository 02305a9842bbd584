//! Phishing vulnerability engine.
//!
//! Estimates susceptibility to social-engineering attacks from the stress
//! label, the burnout composite, and the cognitive state of the employee.

use serde::{Deserialize, Serialize};

use crate::normalize::{direct_scale, inverse_scale, ramp_above, ramp_below};
use crate::risk::{RiskBand, ScoreBreakdown};
use crate::stress::{StressLevel, StressPrediction};
use crate::WorkProfile;

pub const STRESS_WEIGHT: f64 = 0.25;
pub const BURNOUT_WEIGHT: f64 = 0.30;
pub const COGNITIVE_LOAD_WEIGHT: f64 = 0.25;
pub const AWARENESS_WEIGHT: f64 = 0.20;

/// Baseline phishing click-through rate, in percent.
const BASE_CLICK_RATE_PCT: f64 = 15.0;
const MAX_SUCCESS_PCT: f64 = 95.0;

/// Stress label read on the vulnerability scale. Differs from the burnout
/// engine's map: attackers get diminishing returns at the top.
fn stress_factor(level: StressLevel) -> f64 {
    match level {
        StressLevel::Low => 20.0,
        StressLevel::Medium => 45.0,
        StressLevel::High => 70.0,
        StressLevel::Critical => 95.0,
    }
}

/// Cognitive load: inbox and meeting churn plus task complexity. A loaded
/// mind skims instead of reading.
pub fn cognitive_load(p: &WorkProfile) -> f64 {
    let emails = ramp_above(p.emails_per_day, 30.0, 0.7);
    let meetings = ramp_above(p.meetings_per_week, 5.0, 3.0);
    let complexity = direct_scale(p.task_complexity);
    (emails * 0.4 + meetings * 0.3 + complexity * 0.3).clamp(0.0, 100.0)
}

/// Awareness gap (inverse of security mindfulness), proxied from overwork,
/// sleep deficit, and work-life balance. No direct awareness metric is
/// collected, so the proxy stands in.
pub fn awareness_gap(p: &WorkProfile) -> f64 {
    let overwork = ramp_above(p.work_hours_per_week, 40.0, 2.0);
    let sleep = ramp_below(p.sleep_hours_per_day, 7.5, 12.0);
    let balance = inverse_scale(p.work_life_balance);
    (overwork * 0.35 + sleep * 0.35 + balance * 0.30).clamp(0.0, 100.0)
}

/// Expected attack success, in percent: a 15% baseline click rate scaled
/// up to 4x as the vulnerability index approaches 100, capped at 95%.
pub fn attack_success_probability(total: f64) -> f64 {
    (BASE_CLICK_RATE_PCT * (1.0 + 3.0 * total / 100.0)).clamp(0.0, MAX_SUCCESS_PCT)
}

fn recommendation_for(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Low => "Maintain current security practices",
        RiskBand::Moderate => "Schedule a security awareness refresher",
        RiskBand::High => "Immediate security training required",
        RiskBand::Critical => "Urgent intervention needed - high phishing risk",
    }
}

/// Vulnerability index with its factor breakdown and derived figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishingAssessment {
    pub breakdown: ScoreBreakdown,
    /// Percent, [0, 95].
    pub attack_success_probability: f64,
    pub recommendation: String,
}

/// Composite phishing vulnerability for a profile, given the classifier's
/// prediction and the burnout result.
pub fn calculate_vulnerability(
    p: &WorkProfile,
    stress: &StressPrediction,
    burnout: &ScoreBreakdown,
) -> PhishingAssessment {
    let breakdown = ScoreBreakdown::from_components(vec![
        (
            "stress_contribution",
            stress_factor(stress.stress_level),
            STRESS_WEIGHT,
        ),
        ("burnout_contribution", burnout.total, BURNOUT_WEIGHT),
        ("cognitive_load", cognitive_load(p), COGNITIVE_LOAD_WEIGHT),
        ("awareness_gap", awareness_gap(p), AWARENESS_WEIGHT),
    ]);
    let attack_success_probability = attack_success_probability(breakdown.total);
    let recommendation = recommendation_for(breakdown.band).to_string();
    PhishingAssessment {
        breakdown,
        attack_success_probability,
        recommendation,
    }
}
