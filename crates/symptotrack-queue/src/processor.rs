use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use symptotrack_core::models::{RiskLevel, RiskUpdate, SymptomRecord};
use tracing::{error, info, warn};

use crate::audit::AssessmentAudit;
use crate::error::QueueError;
use crate::pipeline::AssessmentPipeline;
use crate::store::RecordStore;
use crate::transcript::TranscriptSource;

/// Counts from one polling cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Assessed and written back.
    pub processed: usize,
    /// Unusable input (e.g. no pain score); left unprocessed.
    pub skipped: usize,
    /// Transcript or store failure; left unprocessed for the next cycle.
    pub failed: usize,
}

enum Outcome {
    Processed(RiskLevel),
    Skipped,
}

/// Run one pass over every unprocessed record.
///
/// Records are handled one at a time. A failure on one record is logged
/// and counted; it never marks the record processed and never stops the
/// cycle. Only a failure to fetch the queue itself is returned as an error.
pub async fn process_pending(
    store: &dyn RecordStore,
    transcripts: &dyn TranscriptSource,
    pipeline: &AssessmentPipeline,
) -> Result<CycleReport, QueueError> {
    let pending = store.fetch_unprocessed().await?;
    let mut report = CycleReport::default();

    if pending.is_empty() {
        info!("no unprocessed symptom records");
        return Ok(report);
    }

    info!(count = pending.len(), "processing symptom records");

    for record in &pending {
        match process_record(store, transcripts, pipeline, record).await {
            Ok(Outcome::Processed(risk_level)) => {
                info!(record_id = %record.id, %risk_level, "record assessed");
                report.processed += 1;
            }
            Ok(Outcome::Skipped) => report.skipped += 1,
            Err(e) => {
                error!(record_id = %record.id, error = %e, "record assessment failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

async fn process_record(
    store: &dyn RecordStore,
    transcripts: &dyn TranscriptSource,
    pipeline: &AssessmentPipeline,
    record: &SymptomRecord,
) -> Result<Outcome, QueueError> {
    if let Err(e) = record.pain_score() {
        warn!(record_id = %record.id, error = %e, "skipping record");
        return Ok(Outcome::Skipped);
    }

    let pain_previous = store.previous_pain(record).await?;
    let transcript = transcripts.transcript(record).await?;
    let request = record.to_request(pain_previous, transcript)?;

    let assessment = pipeline.assess(&request);
    let update = RiskUpdate::from_result(&assessment.result);
    store.save_result(record.id, &update).await?;

    AssessmentAudit::new(record, &assessment.result).emit();

    Ok(Outcome::Processed(assessment.result.risk_level))
}

/// Poll until `shutdown` resolves.
///
/// Cycle errors (e.g. the store being unreachable) are logged and the loop
/// carries on after `interval`. Shutdown is checked between cycles, so an
/// in-flight cycle always completes.
pub async fn run<F>(
    store: &dyn RecordStore,
    transcripts: &dyn TranscriptSource,
    pipeline: &AssessmentPipeline,
    interval: Duration,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    info!(
        interval_secs = interval.as_secs_f64(),
        "starting record polling loop"
    );

    loop {
        match process_pending(store, transcripts, pipeline).await {
            Ok(report) if report != CycleReport::default() => info!(
                processed = report.processed,
                skipped = report.skipped,
                failed = report.failed,
                "polling cycle complete"
            ),
            Ok(_) => {}
            Err(e) => error!(error = %e, "polling cycle failed"),
        }

        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested, stopping polling loop");
                break;
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}
