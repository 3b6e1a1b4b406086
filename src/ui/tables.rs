//! Processes view: top-tasks and top-containers tables.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::format::PLACEHOLDER;
use crate::data::{ContainerEntry, ProcessEntry};

/// Render the Processes view: tasks on the left, containers on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    render_tasks(frame, app, halves[0]);
    render_containers(frame, app, halves[1]);
}

fn render_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let (rows, count) = match app.data {
        Some(ref data) => (
            data.top_tasks.iter().map(task_row).collect::<Vec<_>>(),
            data.process_count,
        ),
        None => (Vec::new(), None),
    };

    let title = match count {
        Some(n) => format!(" Tasks ({n}) "),
        None => " Tasks ".to_string(),
    };

    let header = Row::new(vec!["PID", "CMD", "CPU%", "MEM"]).style(app.theme.header);
    let widths = [
        Constraint::Length(7),
        Constraint::Fill(3),
        Constraint::Length(6),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

fn task_row(task: &ProcessEntry) -> Row<'static> {
    Row::new(vec![
        Cell::from(task.pid.to_string()),
        Cell::from(task.cmd.clone()),
        Cell::from(format!("{:.1}", task.cpu)),
        Cell::from(format!("{}M", task.mem)),
    ])
}

fn render_containers(frame: &mut Frame, app: &App, area: Rect) {
    let (rows, count) = match app.data {
        Some(ref data) => (
            data.top_containers.iter().map(container_row).collect::<Vec<_>>(),
            data.total_containers,
        ),
        None => (Vec::new(), None),
    };

    let title = match count {
        Some(n) => format!(" Containers ({n}) "),
        None => " Containers ".to_string(),
    };

    let header = Row::new(vec!["ID", "NAME", "CPU%", "MEM"]).style(app.theme.header);
    let widths = [
        Constraint::Length(13),
        Constraint::Fill(3),
        Constraint::Length(6),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

fn container_row(container: &ContainerEntry) -> Row<'static> {
    Row::new(vec![
        Cell::from(container.id.clone().unwrap_or_else(|| PLACEHOLDER.to_string())),
        Cell::from(container.name.clone()),
        Cell::from(
            container
                .cpu
                .map(|c| format!("{c:.1}"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        Cell::from(
            container
                .mem
                .map(|m| format!("{m:.0}M"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
    ])
}
