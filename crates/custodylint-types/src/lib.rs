//! Stable DTOs and constants used across the custodylint workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - custody-platform string constants (activity types, effects, chains)
//! - the versioned report envelope

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;

pub use report::{
    Analysis, DocKind, ReportEnvelope, ToolMeta, SCHEMA_REPORT_V1,
};
