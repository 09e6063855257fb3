//! symptotrack-cli
//!
//! Configuration and terminal rendering for the `symptotrack` binary.

pub mod config;
pub mod display;
