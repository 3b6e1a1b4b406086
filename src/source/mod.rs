//! Data source abstraction for receiving telemetry snapshots.
//!
//! This module provides a trait-based abstraction for receiving telemetry
//! from various backends (HTTP polling, local snapshot files, in-memory
//! channels for tests and embedders).

mod channel;
mod file;
mod http;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use http::{HttpSource, PollError};

use std::fmt::Debug;
use std::time::Duration;

use crate::data::TelemetrySnapshot;

/// Trait for receiving telemetry snapshots from various sources.
///
/// Implementations provide snapshots from different backends - an HTTP
/// endpoint, a JSON file, or an in-memory channel.
///
/// # Example
///
/// ```
/// use hwwatch::{DataSource, FileSource};
///
/// let mut source = FileSource::new("telemetry.json");
/// if let Some(snapshot) = source.poll() {
///     println!("CPU: {:?}", snapshot.cpu_temp);
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method must be non-blocking; the caller is the render loop.
    fn poll(&mut self) -> Option<TelemetrySnapshot>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// The error from the most recent failed cycle, if any.
    fn error(&self) -> Option<String>;

    /// Replace the polling cadence.
    ///
    /// Takes effect from the next tick; no extra immediate poll is fired.
    /// Sources without a timer ignore this.
    fn set_interval(&mut self, _interval: Duration) {}
}
