use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;

/// Output of the auxiliary statistical predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub label: RiskLevel,
    /// Highest class probability, in `[0, 1]`.
    pub confidence: f64,
}

/// One feature's contribution as reported by an explainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureImportance {
    pub feature: String,
    pub weight: f64,
}

/// Supplementary signal attached next to a rule-based result.
///
/// Informational only; it never changes `AssessmentResult::risk_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuxiliarySignal {
    pub prediction: Prediction,
    pub top_features: Vec<FeatureImportance>,
}
