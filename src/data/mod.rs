//! Data models and processing for telemetry snapshots.
//!
//! ## Submodules
//!
//! - [`snapshot`]: serde model of the flat JSON telemetry object
//! - [`thresholds`]: temperature classification into low/middle/high states
//! - [`format`]: display formatting (bytes, temperatures, percentages)
//!
//! ## Data flow
//!
//! ```text
//! TelemetrySnapshot (raw JSON, one per poll)
//!        │
//!        ▼
//! App::apply_snapshot()
//!        │
//!        ├──▶ GradientState::update()    (CPU state transitions)
//!        ├──▶ FanAnimator::set_target()  (fan speed targets)
//!        └──▶ stored for rendering       (format::* at draw time)
//! ```

pub mod format;
pub mod snapshot;
pub mod thresholds;

pub use snapshot::{ContainerEntry, PowerStatus, ProcessEntry, TelemetrySnapshot};
pub use thresholds::{GradientState, StateKey, TempSource};
