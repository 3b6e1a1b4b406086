//! HTTP polling data source.
//!
//! Polls the monitor backend's JSON endpoint (`/api/data`) on a fixed,
//! adjustable interval. A background task owns the HTTP client and pushes
//! parsed snapshots over a channel; the render loop drains it via `poll()`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::DataSource;
use crate::data::TelemetrySnapshot;

/// A failed poll cycle. Both variants are non-fatal: the cycle delivers
/// nothing and the schedule continues at the normal interval.
#[derive(Debug, Error)]
pub enum PollError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not a valid telemetry object.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A data source that polls a telemetry endpoint over HTTP.
///
/// The first poll fires immediately on spawn; subsequent polls follow the
/// configured interval. [`DataSource::set_interval`] replaces the cadence
/// from the call point forward - the pending sleep is restarted with the new
/// duration, and no extra poll fires at the change itself.
///
/// Dropping (or [`stop`](HttpSource::stop)ping) the source aborts the
/// background task; a request in flight at that moment is discarded rather
/// than delivered late.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use hwwatch::source::{DataSource, HttpSource};
///
/// # tokio_test::block_on(async {
/// let mut source = HttpSource::spawn("http://pi5:5000/api/data", Duration::from_secs(1));
/// assert_eq!(source.description(), "http: http://pi5:5000/api/data");
///
/// // Nothing delivered yet (and the endpoint above is unreachable anyway);
/// // poll() never blocks on the network.
/// assert!(source.poll().is_none());
/// source.stop();
/// # });
/// ```
#[derive(Debug)]
pub struct HttpSource {
    receiver: mpsc::Receiver<TelemetrySnapshot>,
    interval_tx: watch::Sender<Duration>,
    description: String,
    last_error: Arc<Mutex<Option<String>>>,
    task: JoinHandle<()>,
}

impl HttpSource {
    /// Spawn the polling task. Must be called within a tokio runtime.
    pub fn spawn(url: &str, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let (interval_tx, mut interval_rx) = watch::channel(interval);
        let last_error = Arc::new(Mutex::new(None));
        let error_handle = last_error.clone();
        let endpoint = url.to_string();

        let task = tokio::spawn(async move {
            let client = reqwest::Client::new();
            loop {
                match fetch(&client, &endpoint).await {
                    Ok(snapshot) => {
                        *error_handle.lock().unwrap() = None;
                        debug!(endpoint = %endpoint, "telemetry poll ok");
                        if tx.send(snapshot).await.is_err() {
                            // Receiver dropped
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "telemetry poll failed");
                        *error_handle.lock().unwrap() = Some(e.to_string());
                    }
                }

                // Sleep the current interval, restarting whenever it changes.
                loop {
                    let dur = *interval_rx.borrow_and_update();
                    tokio::select! {
                        _ = tokio::time::sleep(dur) => break,
                        changed = interval_rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                            // Re-read the new interval and sleep again
                        }
                    }
                }
            }
        });

        Self {
            receiver: rx,
            interval_tx,
            description: format!("http: {}", url),
            last_error,
            task,
        }
    }

    /// Cancel future polls. Effective immediately; an in-flight request is
    /// discarded, not delivered.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for HttpSource {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<TelemetrySnapshot, PollError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

impl DataSource for HttpSource {
    fn poll(&mut self) -> Option<TelemetrySnapshot> {
        match self.receiver.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                *self.last_error.lock().unwrap() = Some("poll task stopped".to_string());
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }

    fn set_interval(&mut self, interval: Duration) {
        let _ = self.interval_tx.send(interval);
    }
}
