//! Application state and snapshot fan-out.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{GradientState, TelemetrySnapshot};
use crate::fan::{FanAnimator, RotationSurface};
use crate::source::DataSource;
use crate::ui::Theme;

/// Icon id for the CPU (Noctua) fan tile.
pub const NOCTUA_FAN: &str = "noctua-fan";
/// Icon id for the case fan tile.
pub const SYSTEM_FAN: &str = "system-fan";

/// Smallest poll interval the UI will request.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Step used by the interval up/down keys.
pub const POLL_INTERVAL_STEP: Duration = Duration::from_millis(500);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Temperatures, fans, CPU usage, memory and disk gauges.
    Overview,
    /// Top processes and containers tables.
    Processes,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Processes,
            View::Processes => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        // Two views, so prev == next
        self.next()
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Processes => "Processes",
        }
    }
}

/// The fan tiles visible in the TUI, addressed by icon id.
///
/// This is the [`RotationSurface`] the animator draws through: the two icon
/// ids are registered up front, and anything else is not present - matching
/// a page where a given fan element may simply not exist.
#[derive(Debug, Default)]
pub struct FanIcons {
    noctua_angle: f64,
    system_angle: f64,
}

impl FanIcons {
    /// Current rotation of an icon, in degrees. Unknown ids read as 0.
    pub fn angle(&self, icon: &str) -> f64 {
        match icon {
            NOCTUA_FAN => self.noctua_angle,
            SYSTEM_FAN => self.system_angle,
            _ => 0.0,
        }
    }
}

impl RotationSurface for FanIcons {
    fn contains(&self, icon: &str) -> bool {
        icon == NOCTUA_FAN || icon == SYSTEM_FAN
    }

    fn set_rotation(&mut self, icon: &str, degrees: f64) {
        match icon {
            NOCTUA_FAN => self.noctua_angle = degrees,
            SYSTEM_FAN => self.system_angle = degrees,
            _ => {}
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub data: Option<TelemetrySnapshot>,
    pub load_error: Option<String>,
    pub last_snapshot_at: Option<Instant>,

    // Snapshot consumers
    pub gradient: GradientState,
    pub animator: FanAnimator,
    pub icons: FanIcons,

    // Polling
    pub poll_interval: Duration,

    // UI
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and poll interval.
    pub fn new(source: Box<dyn DataSource>, poll_interval: Duration, fan_scale: f64) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            source,
            data: None,
            load_error: None,
            last_snapshot_at: None,
            gradient: GradientState::new(),
            animator: FanAnimator::new(fan_scale),
            icons: FanIcons::default(),
            poll_interval,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source and apply any new snapshot.
    ///
    /// Returns Ok(true) if a snapshot was applied, Ok(false) otherwise. A
    /// failed cycle keeps everything previously displayed and records the
    /// source's error for the status bar.
    pub fn reload_data(&mut self) -> Result<bool> {
        if let Some(snapshot) = self.source.poll() {
            self.apply_snapshot(snapshot);
            self.load_error = None;
            Ok(true)
        } else {
            self.load_error = self.source.error();
            Ok(false)
        }
    }

    /// Deliver a snapshot to every consumer, synchronously and in a fixed
    /// order: gradient state, then fan targets, then the stored snapshot the
    /// renderers read. Nothing observes a partially-applied snapshot.
    pub fn apply_snapshot(&mut self, snapshot: TelemetrySnapshot) {
        if let Some(cpu) = snapshot.cpu_temp {
            self.gradient.update(cpu);
        }

        self.animator.set_target(&mut self.icons, NOCTUA_FAN, snapshot.noctua_rpm);
        self.animator.set_target(&mut self.icons, SYSTEM_FAN, snapshot.system_fan_rpm);

        self.data = Some(snapshot);
        self.last_snapshot_at = Some(Instant::now());
    }

    /// Advance the fan animations by one frame. Called once per main-loop
    /// iteration; the loop's tick is the frame clock.
    pub fn advance_frames(&mut self, now: Instant) {
        self.animator.frame(now, &mut self.icons);
    }

    /// Replace the poll cadence; effective from the source's next tick.
    pub fn set_poll_interval(&mut self, interval: Duration) {
        let interval = interval.max(MIN_POLL_INTERVAL);
        self.poll_interval = interval;
        self.source.set_interval(interval);
        self.set_status_message(format!("poll interval: {}ms", interval.as_millis()));
    }

    /// Speed up polling by one step.
    pub fn interval_down(&mut self) {
        let next = self.poll_interval.saturating_sub(POLL_INTERVAL_STEP);
        self.set_poll_interval(next);
    }

    /// Slow down polling by one step.
    pub fn interval_up(&mut self) {
        let next = self.poll_interval.saturating_add(POLL_INTERVAL_STEP);
        self.set_poll_interval(next);
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StateKey;
    use crate::source::ChannelSource;

    /// Source that always fails, for the poll-failure scenario.
    #[derive(Debug)]
    struct FailingSource;

    impl DataSource for FailingSource {
        fn poll(&mut self) -> Option<TelemetrySnapshot> {
            None
        }
        fn description(&self) -> &str {
            "failing"
        }
        fn error(&self) -> Option<String> {
            Some("network error: connection refused".to_string())
        }
    }

    fn app_with_channel() -> (tokio::sync::watch::Sender<TelemetrySnapshot>, App) {
        let (tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), Duration::from_secs(1), 50.0);
        // Drain the channel's initial empty snapshot
        let _ = app.reload_data();
        (tx, app)
    }

    #[test]
    fn test_gradient_transition_without_churn() {
        let (tx, mut app) = app_with_channel();

        tx.send(TelemetrySnapshot {
            cpu_temp: Some(60.0),
            ..Default::default()
        })
        .unwrap();
        app.reload_data().unwrap();
        assert_eq!(app.gradient.current(), Some(StateKey::Middle));

        // Same reading again: state key unchanged, no transition fires
        tx.send(TelemetrySnapshot {
            cpu_temp: Some(60.0),
            ..Default::default()
        })
        .unwrap();
        let mut gradient = app.gradient.clone();
        app.reload_data().unwrap();
        assert_eq!(gradient.update(60.0), None);
        assert_eq!(app.gradient.current(), Some(StateKey::Middle));
    }

    #[test]
    fn test_fan_stops_within_one_frame() {
        let (tx, mut app) = app_with_channel();
        let t0 = Instant::now();

        tx.send(TelemetrySnapshot {
            system_fan_rpm: Some(3000.0),
            ..Default::default()
        })
        .unwrap();
        app.reload_data().unwrap();
        app.advance_frames(t0);
        app.advance_frames(t0 + Duration::from_millis(500));
        assert!(app.icons.angle(SYSTEM_FAN) > 0.0);

        // RPM drops to zero: stopped and reset before the next frame
        tx.send(TelemetrySnapshot {
            system_fan_rpm: Some(0.0),
            ..Default::default()
        })
        .unwrap();
        app.reload_data().unwrap();
        assert!(!app.animator.is_running(SYSTEM_FAN));
        assert_eq!(app.icons.angle(SYSTEM_FAN), 0.0);
    }

    #[test]
    fn test_poll_failure_keeps_displayed_data() {
        let (tx, mut app) = app_with_channel();

        tx.send(TelemetrySnapshot {
            cpu_temp: Some(48.0),
            mem_percent: Some(32.5),
            ..Default::default()
        })
        .unwrap();
        app.reload_data().unwrap();

        // Swap in a source that fails every cycle
        app.source = Box::new(FailingSource);
        let applied = app.reload_data().unwrap();

        assert!(!applied);
        let data = app.data.as_ref().unwrap();
        assert_eq!(data.cpu_temp, Some(48.0));
        assert_eq!(data.mem_percent, Some(32.5));
        assert!(app.load_error.as_deref().unwrap().contains("network error"));
    }

    #[test]
    fn test_interval_clamped_to_minimum() {
        let (_tx, mut app) = app_with_channel();

        app.set_poll_interval(Duration::from_millis(1000));
        app.interval_down();
        app.interval_down();
        app.interval_down();
        assert_eq!(app.poll_interval, MIN_POLL_INTERVAL);

        app.interval_up();
        assert_eq!(app.poll_interval, MIN_POLL_INTERVAL + POLL_INTERVAL_STEP);
    }

    #[test]
    fn test_view_cycle() {
        let (_tx, mut app) = app_with_channel();
        assert_eq!(app.current_view, View::Overview);
        app.next_view();
        assert_eq!(app.current_view, View::Processes);
        app.next_view();
        assert_eq!(app.current_view, View::Overview);
    }
}
