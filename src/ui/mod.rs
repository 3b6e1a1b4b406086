//! Terminal rendering using ratatui.
//!
//! - [`common`]: header, tab bar, status bar, help overlay
//! - [`overview`]: temperature and fan tiles, memory/disk gauges
//! - [`tables`]: top-tasks and top-containers tables
//! - [`theme`]: colors and styles, light/dark auto-detection

pub mod common;
pub mod overview;
pub mod tables;
pub mod theme;

pub use theme::Theme;
