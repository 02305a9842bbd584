//! Risk banding and score breakdowns shared by the burnout and phishing
//! engines.

use serde::{Deserialize, Serialize};

/// Named risk category derived from a composite 0-100 score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
            RiskBand::Critical => "Critical",
        }
    }
}

/// Band thresholds: <30 Low, <50 Moderate, <70 High, >=70 Critical.
pub fn band_for(total: f64) -> RiskBand {
    if total >= 70.0 {
        RiskBand::Critical
    } else if total >= 50.0 {
        RiskBand::High
    } else if total >= 30.0 {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    }
}

/// One weighted component of a composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentContribution {
    pub name: String,
    /// Unweighted component score, 0-100.
    pub score: f64,
    pub weight: f64,
    /// `score * weight`; contributions sum to the composite total.
    pub contribution: f64,
}

/// Composite risk score with its per-component breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted sum of the components, clamped to [0, 100].
    pub total: f64,
    pub band: RiskBand,
    pub components: Vec<ComponentContribution>,
}

impl ScoreBreakdown {
    /// Builds a breakdown from `(name, component score, weight)` triples.
    pub fn from_components(parts: Vec<(&str, f64, f64)>) -> ScoreBreakdown {
        let components: Vec<ComponentContribution> = parts
            .into_iter()
            .map(|(name, score, weight)| ComponentContribution {
                name: name.to_string(),
                score,
                weight,
                contribution: score * weight,
            })
            .collect();
        let total = components
            .iter()
            .map(|c| c.contribution)
            .sum::<f64>()
            .clamp(0.0, 100.0);
        ScoreBreakdown {
            total,
            band: band_for(total),
            components,
        }
    }

    pub fn component(&self, name: &str) -> Option<&ComponentContribution> {
        self.components.iter().find(|c| c.name == name)
    }
}
