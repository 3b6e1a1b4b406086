//! Channel-based data source.
//!
//! Receives telemetry snapshots via a tokio watch channel. Useful for tests
//! and for embedders that produce snapshots themselves (e.g. reading sensors
//! in-process) rather than polling a backend.

use tokio::sync::watch;

use super::DataSource;
use crate::data::TelemetrySnapshot;

/// A data source that receives telemetry snapshots via a channel.
///
/// The producer sends snapshots through the watch channel and this source
/// hands them to the render loop.
///
/// # Example
///
/// ```
/// use hwwatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("in-process sensors");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<TelemetrySnapshot>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    pub fn new(receiver: watch::Receiver<TelemetrySnapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for sending snapshots to a ChannelSource.
    ///
    /// Returns (sender, source); the sender pushes snapshots and the source
    /// plugs into the dashboard.
    pub fn create(source_description: &str) -> (watch::Sender<TelemetrySnapshot>, Self) {
        let (tx, rx) = watch::channel(TelemetrySnapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<TelemetrySnapshot> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        // Check if there's a new value without blocking
        if self.receiver.has_changed().unwrap_or(false) {
            let snapshot = self.receiver.borrow_and_update().clone();
            Some(snapshot)
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        // Channel sources have no I/O of their own to fail
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the default (empty) snapshot
        let snapshot = source.poll();
        assert!(snapshot.is_some());
        assert!(snapshot.unwrap().cpu_temp.is_none());

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Send a new snapshot
        let new_snapshot = TelemetrySnapshot {
            cpu_temp: Some(58.0),
            ..Default::default()
        };
        tx.send(new_snapshot).unwrap();

        // Now poll returns the new snapshot
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.cpu_temp, Some(58.0));
    }

    #[test]
    fn test_channel_source_description() {
        let (_tx, source) = ChannelSource::create("in-process sensors");
        assert_eq!(source.description(), "channel: in-process sensors");
    }
}
