//! Pure document analysis (no IO).
//!
//! Input: a parsed JSON document constructed elsewhere.
//! Output: document kind + ordered issues and suggestions.

#![forbid(unsafe_code)]

pub mod classify;
pub mod document;
pub mod report;

pub mod checks;
mod engine;

pub use document::{Document, DocumentError, Field};
pub use engine::{evaluate, evaluate_document};
pub use report::DomainReport;

#[cfg(test)]
mod prop_tests;
