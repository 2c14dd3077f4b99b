//! Rendering for the terminal report.

#![forbid(unsafe_code)]

mod text;

pub use text::render_text;
