//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::format;
use crate::data::{PowerStatus, StateKey};

/// Render the header bar: state dot, power badge, uptime, CPU usage.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(" HWWATCH ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    // Overall dot follows the CPU temperature state
    let dot_style = app
        .theme
        .state_style(app.gradient.current().unwrap_or(StateKey::Middle));

    let power = data.power().unwrap_or(PowerStatus::Unknown);

    let line = Line::from(vec![
        Span::styled(" ● ", dot_style),
        Span::styled("HWWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(power.label(), app.theme.power_style(power)),
        Span::raw(" │ up "),
        Span::raw(data.uptime.clone().unwrap_or_else(|| "N/A".to_string())),
        Span::raw(" │ CPU "),
        Span::styled(
            format::format_percent(data.cpu_usage),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![Line::from(" 1:Overview "), Line::from(" 2:Processes ")];

    let selected = match app.current_view {
        View::Overview => 0,
        View::Processes => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, poll interval, time since last snapshot, controls.
/// Also displays temporary status messages and poll errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | next poll in {}ms | q:quit", err, app.poll_interval.as_millis())
    } else if let Some(at) = app.last_snapshot_at {
        format!(
            " {} | every {}ms | updated {:.1}s ago | +/-:interval Tab:switch ?:help q:quit",
            app.source_description(),
            app.poll_interval.as_millis(),
            at.elapsed().as_secs_f64(),
        )
    } else {
        format!(" {} | waiting for first snapshot | q:quit", app.source_description())
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab ←/→ h/l  Switch views"),
        Line::from("  1            Overview"),
        Line::from("  2            Processes"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Polling",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  +            Poll less often"),
        Line::from("  -            Poll more often"),
        Line::from("  r            Poll now"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?            Toggle this help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 20u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
