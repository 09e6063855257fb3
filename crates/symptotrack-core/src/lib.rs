//! symptotrack-core
//!
//! Pure domain types for patient risk assessment. No I/O and no logging;
//! this is the shared vocabulary of the SymptoTrack workspace.

pub mod error;
pub mod models;
