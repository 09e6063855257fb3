use std::future::Future;
use std::pin::Pin;

use symptotrack_core::models::{RiskUpdate, SymptomRecord};
use uuid::Uuid;

use crate::error::QueueError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of unassessed symptom records and sink for their verdicts.
///
/// Implementations own their own locking; the processor never holds a
/// store lock across an assessment.
pub trait RecordStore: Send + Sync {
    /// Records with no risk level yet, oldest first.
    fn fetch_unprocessed(&self) -> BoxFuture<'_, Result<Vec<SymptomRecord>, QueueError>>;

    /// Pain score of the user's check-in preceding `record`.
    /// `None` when there is no earlier check-in or its score is unusable.
    fn previous_pain<'a>(
        &'a self,
        record: &'a SymptomRecord,
    ) -> BoxFuture<'a, Result<Option<i32>, QueueError>>;

    /// Write the verdict for record `id`, marking it processed.
    fn save_result<'a>(
        &'a self,
        id: Uuid,
        update: &'a RiskUpdate,
    ) -> BoxFuture<'a, Result<(), QueueError>>;
}

/// Unprocessed records from `records`, sorted oldest first.
pub(crate) fn unprocessed(records: &[SymptomRecord]) -> Vec<SymptomRecord> {
    let mut pending: Vec<_> = records
        .iter()
        .filter(|r| !r.is_processed())
        .cloned()
        .collect();
    pending.sort_by_key(|r| r.timestamp);
    pending
}

/// The most recent other check-in by the same user that is not newer than
/// `current`. Its pain score must resolve cleanly to count.
pub(crate) fn previous_pain_in(records: &[SymptomRecord], current: &SymptomRecord) -> Option<i32> {
    records
        .iter()
        .filter(|r| {
            r.user_id == current.user_id && r.id != current.id && r.timestamp <= current.timestamp
        })
        .max_by_key(|r| r.timestamp)
        .and_then(|r| r.pain_score().ok())
}

pub(crate) fn apply_update(
    records: &mut [SymptomRecord],
    id: Uuid,
    update: &RiskUpdate,
) -> Result<(), QueueError> {
    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(QueueError::RecordNotFound(id))?;
    record.risk_level = Some(update.risk_level);
    record.ai_explanation = Some(update.ai_explanation.clone());
    Ok(())
}
