//! Glyphref - a terminal reference for Unicode and emoji characters
//!
//! This library provides the character catalog, the filtering engine over it,
//! the PDF exporter, and the TUI for browsing and copying characters.

pub mod dataset;
pub mod export;
pub mod ui;
