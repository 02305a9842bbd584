//! Analysis pipeline and the structured payload handed to the external
//! explanation renderer. The renderer turns this into prose; nothing here
//! depends on how.

use serde::Serialize;

use crate::burnout::calculate_burnout;
use crate::dataset::DatasetStore;
use crate::phishing::{calculate_vulnerability, PhishingAssessment};
use crate::risk::ScoreBreakdown;
use crate::similarity::{find_similar, SimilarityError, SimilarityResult};
use crate::stats::DatasetStatistics;
use crate::stress::{StressModel, StressPrediction};
use crate::WorkProfile;

/// Everything one analysis request produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub stress: StressPrediction,
    pub burnout: ScoreBreakdown,
    pub phishing: PhishingAssessment,
    pub similar_cases: Vec<SimilarityResult<'a>>,
    pub dataset_stats: DatasetStatistics,
}

/// Runs the full pipeline: classify stress, score burnout and phishing
/// vulnerability, retrieve the top-k similar cases, aggregate dataset
/// statistics. Pure over its inputs, so concurrent callers may share the
/// store freely.
pub fn analyze<'a>(
    profile: &WorkProfile,
    model: &dyn StressModel,
    store: &'a DatasetStore,
    k: usize,
) -> Result<AnalysisReport<'a>, SimilarityError> {
    let stress = model.predict(profile);
    let burnout = calculate_burnout(profile, stress.stress_level);
    let phishing = calculate_vulnerability(profile, &stress, &burnout);
    let similar_cases = find_similar(profile, store.records(), k)?;
    Ok(AnalysisReport {
        stress,
        burnout,
        phishing,
        similar_cases,
        dataset_stats: store.stats(),
    })
}

impl AnalysisReport<'_> {
    /// Compact benchmarking context lines for the renderer: dataset size,
    /// mean burnout, and a one-liner per similar case with its recorded
    /// outcome.
    pub fn context_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.push(format!(
            "Dataset context: {} employees analyzed",
            self.dataset_stats.total
        ));
        out.push(format!(
            "Average burnout score: {:.1}/100",
            self.dataset_stats.mean_burnout
        ));
        if !self.similar_cases.is_empty() {
            out.push("Similar employee cases:".to_string());
            for case in &self.similar_cases {
                out.push(format!(
                    "  Case {} ({:.0}% similar): stress {}, burnout {:.1}/100, outcome: {}",
                    case.rank,
                    case.similarity * 100.0,
                    case.record.stress_level.as_str(),
                    case.record.burnout_score,
                    case.record.outcome,
                ));
            }
        }
        out
    }
}
