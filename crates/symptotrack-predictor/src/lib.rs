//! symptotrack-predictor
//!
//! Seam for a statistical risk model and its explainer. The output is a
//! supplementary signal only; the rule engine alone decides the verdict.
//! Implementations are constructed by the caller and injected.

pub mod error;
pub mod placeholder;

use serde::{Deserialize, Serialize};
use symptotrack_core::models::{FeatureImportance, Prediction};

use crate::error::PredictorError;

pub use placeholder::{PlaceholderExplainer, PlaceholderPredictor};

/// Model input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub pain_today: i32,
    pub pain_previous: i32,
}

pub trait Predictor: Send + Sync {
    fn predict(&self, features: &Features) -> Result<Prediction, PredictorError>;
}

pub trait Explainer: Send + Sync {
    /// Feature contributions, strongest first.
    fn explain(&self, features: &Features) -> Result<Vec<FeatureImportance>, PredictorError>;
}

/// Highest value of a class-probability vector.
pub fn max_probability(probabilities: &[f64]) -> Result<f64, PredictorError> {
    probabilities
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(PredictorError::EmptyProbabilities)
}
