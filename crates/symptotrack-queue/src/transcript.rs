use symptotrack_core::models::SymptomRecord;

use crate::error::QueueError;
use crate::store::BoxFuture;

/// Resolves the free text to assess for a record.
///
/// A speech-to-text backend plugs in here. Failures must be returned, not
/// papered over with empty text, so the record stays retryable.
pub trait TranscriptSource: Send + Sync {
    fn transcript<'a>(
        &'a self,
        record: &'a SymptomRecord,
    ) -> BoxFuture<'a, Result<String, QueueError>>;
}

/// Uses the record's typed description as the transcript.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDescription;

impl TranscriptSource for RecordDescription {
    fn transcript<'a>(
        &'a self,
        record: &'a SymptomRecord,
    ) -> BoxFuture<'a, Result<String, QueueError>> {
        Box::pin(async move { Ok(record.description.clone().unwrap_or_default()) })
    }
}
