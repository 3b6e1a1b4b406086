//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{PowerStatus, StateKey};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for low (cool) sensor states.
    pub low: Color,
    /// Color for middle (warm) sensor states.
    pub middle: Color,
    /// Color for high (hot) sensor states.
    pub high: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            low: Color::Cyan,
            middle: Color::Yellow,
            high: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            low: Color::Blue,
            middle: Color::Yellow,
            high: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a sensor state key
    pub fn state_style(&self, key: StateKey) -> Style {
        match key {
            StateKey::Low => Style::default().fg(self.low),
            StateKey::Middle => Style::default().fg(self.middle),
            StateKey::High => Style::default().fg(self.high).add_modifier(Modifier::BOLD),
        }
    }

    /// Get style for the power badge
    pub fn power_style(&self, status: PowerStatus) -> Style {
        match status {
            PowerStatus::Ok => Style::default().fg(self.low),
            PowerStatus::Low => Style::default().fg(self.high).add_modifier(Modifier::BOLD),
            PowerStatus::Unknown => Style::default().add_modifier(Modifier::DIM),
        }
    }
}
