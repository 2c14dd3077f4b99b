//! Use case orchestration for custodylint.
//!
//! This crate provides the application layer: it coordinates parsing, the
//! domain engine, enrichment, and report assembly. It is intentionally thin
//! and does no file or terminal I/O; the CLI crate owns that.

#![forbid(unsafe_code)]

mod analyze;
mod parse;

pub use analyze::{run_analyze, AnalyzeInput, AnalyzeOutput};
pub use parse::parse_document;
