use symptotrack_core::models::{FeatureImportance, Prediction, RiskLevel};

use crate::error::PredictorError;
use crate::{Explainer, Features, Predictor, max_probability};

/// Stand-in until a trained model exists. Always answers HIGH with
/// probabilities `[0.1, 0.9]` for `[LOW, HIGH]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPredictor;

impl PlaceholderPredictor {
    const PROBABILITIES: [f64; 2] = [0.1, 0.9];
}

impl Predictor for PlaceholderPredictor {
    fn predict(&self, _features: &Features) -> Result<Prediction, PredictorError> {
        Ok(Prediction {
            label: RiskLevel::High,
            confidence: max_probability(&Self::PROBABILITIES)?,
        })
    }
}

/// Fixed importance list matching [`PlaceholderPredictor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderExplainer;

impl Explainer for PlaceholderExplainer {
    fn explain(&self, _features: &Features) -> Result<Vec<FeatureImportance>, PredictorError> {
        Ok([
            ("Pain increased", 0.6),
            ("Negative tone in voice", 0.3),
            ("Keyword: sharp pain", 0.1),
        ]
        .into_iter()
        .map(|(feature, weight)| FeatureImportance {
            feature: feature.to_string(),
            weight,
        })
        .collect())
    }
}
