//! One rule module per document kind, plus shared condition heuristics.
//!
//! Every rule appends to the shared [`Analysis`](custodylint_types::Analysis)
//! in a fixed order and never short-circuits; mutually exclusive branches are
//! written as ordered if/else chains so exactly one of them fires.

pub mod condition;
pub mod config;
pub mod policy;
pub mod transaction;
