// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # hwwatch
//!
//! A terminal dashboard for live hardware telemetry.
//!
//! hwwatch polls a monitor backend's flat JSON endpoint (the `/api/data`
//! contract of a Raspberry Pi system monitor) and renders temperatures, fan
//! speeds, CPU/memory/disk usage, and process/container tables. Fan icons
//! rotate continuously at a rate derived from the reported RPM, advanced on
//! the render loop's frame clock rather than the (much slower) poll cadence.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(snapshot,│    │(render, │    │         │ │
//! │  └────┬────┘    │ formats) │    │ fan glyph)   └─────────┘ │
//! │       │         └──────────┘    └─────────┘                │
//! │       ├────────────▶ fan (per-frame rotation animator)     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | FileSource | ChannelSource    │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state; delivers each snapshot to all consumers
//!   (gradient state, fan targets, renderers) synchronously and in a fixed
//!   order, so nothing observes a half-applied snapshot
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   HTTP polling, file polling, and channel-based implementations
//! - **[`data`]**: The telemetry snapshot model, temperature state
//!   classification, and display formatting
//! - **[`fan`]**: The rotation animator - per-icon angle state advanced by
//!   wall-clock elapsed time every frame
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll a live backend
//! hwwatch --url http://pi5:5000/api/data
//!
//! # Replay a captured snapshot file
//! hwwatch --file telemetry.json
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use std::time::Duration;
//! use hwwatch::{App, FileSource};
//!
//! let source = Box::new(FileSource::new("telemetry.json"));
//! let app = App::new(source, Duration::from_secs(1), 50.0);
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use std::time::Duration;
//! use hwwatch::{App, ChannelSource, TelemetrySnapshot};
//!
//! let (tx, source) = ChannelSource::create("in-process sensors");
//! let mut app = App::new(Box::new(source), Duration::from_secs(1), 50.0);
//!
//! tx.send(TelemetrySnapshot { cpu_temp: Some(48.5), ..Default::default() }).unwrap();
//! app.reload_data().unwrap();
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod fan;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use data::{
    ContainerEntry, GradientState, PowerStatus, ProcessEntry, StateKey, TelemetrySnapshot,
    TempSource,
};
pub use fan::{FanAnimator, RotationSurface, DEFAULT_SCALE_FACTOR};
pub use source::{ChannelSource, DataSource, FileSource, HttpSource, PollError};
