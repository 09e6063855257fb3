use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}
