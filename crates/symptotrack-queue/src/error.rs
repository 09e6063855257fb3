use thiserror::Error;
use uuid::Uuid;

use symptotrack_core::error::CoreError;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("transcript unavailable: {0}")]
    Transcript(String),

    #[error("invalid record: {0}")]
    InvalidRecord(#[from] CoreError),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}
