// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod fan;
mod source;
mod ui;

use app::{App, View};
use source::{DataSource, FileSource, HttpSource};

/// How long to wait for input per loop iteration. This is the frame clock:
/// fan angles advance once per iteration, much faster than the poll cadence.
const FRAME_TICK: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(name = "hwwatch")]
#[command(about = "TUI dashboard for live hardware telemetry")]
struct Args {
    /// Telemetry endpoint URL
    #[arg(
        short,
        long,
        default_value = "http://127.0.0.1:5000/api/data",
        conflicts_with = "file"
    )]
    url: String,

    /// Poll a JSON snapshot file instead of an HTTP endpoint
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Poll interval in milliseconds (minimum 250)
    #[arg(short, long, default_value = "1000")]
    interval: u64,

    /// Divisor mapping fan RPM to visual rotation speed
    #[arg(long, default_value = "50")]
    scale: f64,

    /// Write log output to this file (level via RUST_LOG, stdout is the TUI's)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_tracing(path)?;
    }

    let interval = Duration::from_millis(args.interval).max(app::MIN_POLL_INTERVAL);

    // File-based mode needs no async runtime
    if let Some(ref path) = args.file {
        let source = Box::new(FileSource::new(path));
        return run_tui(source, interval, args.scale);
    }

    // HTTP mode: the poll task lives on the runtime's worker threads while
    // the TUI loop owns the main thread.
    let rt = tokio::runtime::Runtime::new()?;
    let source = rt.block_on(async { Box::new(HttpSource::spawn(&args.url, interval)) });

    run_tui(source, interval, args.scale)
}

fn init_tracing(path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, interval: Duration, fan_scale: f64) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and pick up any snapshot already waiting
    let mut app = App::new(source, interval, fan_scale);
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

// Minimum terminal size for usable display
const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 14;

/// Render the "terminal too small" notice, roughly vertically centered.
/// Must cope with any size down to 0x0; the user controls the terminal.
fn render_too_small(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = ratatui::widgets::Paragraph::new(msg)
        .alignment(ratatui::layout::Alignment::Center)
        .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
    let y = (area.height / 2).saturating_sub(2);
    let height = 5u16.min(area.height.saturating_sub(y));
    let centered = ratatui::layout::Rect::new(0, y, area.width, height);
    frame.render_widget(paragraph, centered);
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                render_too_small(frame, area);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.current_view {
                View::Overview => ui::overview::render(frame, app, chunks[2]),
                View::Processes => ui::tables::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Wait up to one frame tick for input
        if let Some(event) = events::poll_event(FRAME_TICK)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    events::handle_key_event(app, key);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Drain any snapshot the source delivered, then advance fan frames
        let _ = app.reload_data();
        app.advance_frames(Instant::now());
    }

    Ok(())
}
