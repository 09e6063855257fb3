use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid rule set: {0}")]
    InvalidRuleSet(String),

    #[error("failed to read rule set: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
