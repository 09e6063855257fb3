use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("explanation failed: {0}")]
    Explanation(String),

    #[error("model returned no class probabilities")]
    EmptyProbabilities,
}
