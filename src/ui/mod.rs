//! # UI Module
//!
//! Terminal user interface for browsing the character catalog.
//!
//! ## Components
//!
//! - [`App`] - Application state (query, tabs, section state, selection)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`mod@clipboard`] - Clipboard writer with OSC 52 fallback
//! - [`mod@toast`] - Transient confirmation messages
//! - [`mod@theme`] / [`mod@config`] - Colors and persisted settings

pub mod app;
pub mod clipboard;
pub mod config;
pub mod render;
pub mod theme;
pub mod toast;

pub use app::App;
pub use render::render;
