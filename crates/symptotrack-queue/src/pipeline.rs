use std::sync::Arc;

use serde::Serialize;
use symptotrack_core::models::{AssessmentResult, AuxiliarySignal, PatientAssessmentRequest};
use symptotrack_predictor::error::PredictorError;
use symptotrack_predictor::{
    Explainer, Features, PlaceholderExplainer, PlaceholderPredictor, Predictor,
};
use symptotrack_rules::RuleSet;
use tracing::warn;

/// A rule-based verdict plus the optional model signal beside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub result: AssessmentResult,
    pub auxiliary: Option<AuxiliarySignal>,
}

/// The rule engine wired to its collaborators. Built once at startup and
/// shared by reference; holds no per-call state.
pub struct AssessmentPipeline {
    rule_set: Arc<RuleSet>,
    predictor: Box<dyn Predictor>,
    explainer: Box<dyn Explainer>,
}

impl AssessmentPipeline {
    pub fn new(
        rule_set: impl Into<Arc<RuleSet>>,
        predictor: Box<dyn Predictor>,
        explainer: Box<dyn Explainer>,
    ) -> Self {
        Self {
            rule_set: rule_set.into(),
            predictor,
            explainer,
        }
    }

    pub fn with_placeholder_model(rule_set: impl Into<Arc<RuleSet>>) -> Self {
        Self::new(
            rule_set,
            Box::new(PlaceholderPredictor),
            Box::new(PlaceholderExplainer),
        )
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Assess one request. The model signal is best effort: a predictor
    /// error is logged and leaves `auxiliary` empty.
    pub fn assess(&self, request: &PatientAssessmentRequest) -> Assessment {
        let result = symptotrack_rules::assess(request, &self.rule_set);

        let auxiliary = match self.auxiliary(request) {
            Ok(signal) => Some(signal),
            Err(e) => {
                warn!(
                    patient_id = %request.patient_id,
                    error = %e,
                    "auxiliary predictor failed"
                );
                None
            }
        };

        Assessment { result, auxiliary }
    }

    fn auxiliary(
        &self,
        request: &PatientAssessmentRequest,
    ) -> Result<AuxiliarySignal, PredictorError> {
        let features = Features {
            pain_today: request.pain_today,
            pain_previous: request.pain_previous,
        };
        Ok(AuxiliarySignal {
            prediction: self.predictor.predict(&features)?,
            top_features: self.explainer.explain(&features)?,
        })
    }
}
