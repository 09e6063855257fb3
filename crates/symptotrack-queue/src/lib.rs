//! symptotrack-queue
//!
//! Orchestration around the rule engine: pull unassessed symptom records
//! from a store, resolve their inputs, assess them and write the verdict
//! back. Owns logging, audit events and the polling loop; a record whose
//! assessment fails is left unprocessed so the next cycle retries it.

pub mod audit;
pub mod error;
pub mod file;
pub mod memory;
pub mod pipeline;
pub mod processor;
pub mod store;
pub mod transcript;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use pipeline::{Assessment, AssessmentPipeline};
pub use processor::{CycleReport, process_pending, run};
pub use store::RecordStore;
pub use transcript::{RecordDescription, TranscriptSource};
