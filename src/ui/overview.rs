//! Overview rendering: temperature tiles, fan tiles, usage gauges.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::{App, NOCTUA_FAN, SYSTEM_FAN};
use crate::data::format;
use crate::data::{StateKey, TelemetrySnapshot, TempSource};

/// Rotation frames for the fan glyph, one per 45 degrees. Four glyphs cover
/// a half turn; a spinning fan looks the same half a turn later.
const FAN_FRAMES: [char; 4] = ['|', '/', '─', '\\'];

/// Thermometer fill glyph per state.
fn thermo_glyph(key: StateKey) -> char {
    match key {
        StateKey::Low => '▂',
        StateKey::Middle => '▅',
        StateKey::High => '█',
    }
}

/// Pick the fan frame for a rotation angle in degrees.
pub(crate) fn fan_glyph(angle: f64) -> char {
    let index = (angle.rem_euclid(360.0) / 45.0) as usize;
    FAN_FRAMES[index % FAN_FRAMES.len()]
}

/// Render the Overview view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let paragraph = Paragraph::new("Waiting for telemetry...")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(4), // Temperature tiles
        Constraint::Length(4), // Fan tiles
        Constraint::Length(3), // Memory gauge
        Constraint::Length(3), // Disk gauge
        Constraint::Min(0),
    ])
    .split(area);

    render_temps(frame, app, data, chunks[0]);
    render_fans(frame, app, data, chunks[1]);

    render_gauge(
        frame,
        app,
        chunks[2],
        " Memory ",
        data.mem_percent,
        match (data.mem_used, data.mem_total) {
            (Some(used), Some(total)) => format::format_mem_pair(used, total),
            _ => format::PLACEHOLDER.to_string(),
        },
    );
    render_gauge(
        frame,
        app,
        chunks[3],
        " Disk ",
        data.disk_percent,
        match (data.disk_used, data.disk_total) {
            (Some(used), Some(total)) => format::format_usage_pair(used, total),
            _ => format::PLACEHOLDER.to_string(),
        },
    );
}

fn render_temps(frame: &mut Frame, app: &App, data: &TelemetrySnapshot, area: Rect) {
    let tiles = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let sensors = [
        ("CPU", TempSource::Cpu, data.cpu_temp),
        ("NVME", TempSource::Nvme, data.nvme_temp),
        ("RP1", TempSource::Rp1, data.rp1_temp),
    ];

    for ((name, source, temp), tile) in sensors.into_iter().zip(tiles.iter()) {
        let (glyph, style) = match temp {
            Some(t) => {
                let key = source.classify(t);
                (thermo_glyph(key), app.theme.state_style(key))
            }
            None => (' ', Style::default().add_modifier(Modifier::DIM)),
        };

        let line = Line::from(vec![
            Span::styled(format!(" {glyph} "), style),
            Span::styled(format::format_temp(temp), style.add_modifier(Modifier::BOLD)),
        ]);

        let block = Block::default()
            .title(format!(" {name} "))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));

        frame.render_widget(Paragraph::new(line).block(block), *tile);
    }
}

fn render_fans(frame: &mut Frame, app: &App, data: &TelemetrySnapshot, area: Rect) {
    let tiles = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let fans = [
        ("Noctua A4x10", NOCTUA_FAN, data.noctua_rpm),
        ("System Fan", SYSTEM_FAN, data.system_fan_rpm),
    ];

    for ((name, icon, rpm), tile) in fans.into_iter().zip(tiles.iter()) {
        let spinning = app.animator.is_running(icon);
        let glyph = if spinning {
            fan_glyph(app.icons.angle(icon))
        } else {
            '·'
        };
        let glyph_style = if spinning {
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let line = Line::from(vec![
            Span::styled(format!(" {glyph} "), glyph_style),
            Span::raw(format::format_rpm(rpm)),
        ]);

        let block = Block::default()
            .title(format!(" {name} "))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));

        frame.render_widget(Paragraph::new(line).block(block), *tile);
    }
}

fn render_gauge(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    percent: Option<f64>,
    detail: String,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(percent) = percent else {
        let paragraph = Paragraph::new(format::PLACEHOLDER).block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(app.theme.highlight))
        .ratio(ratio)
        .label(format!("{} · {}", format::format_percent(Some(percent)), detail));

    frame.render_widget(gauge, area);
}
