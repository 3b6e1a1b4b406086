//! Telemetry snapshot types.
//!
//! These types match the flat JSON object served by the monitor backend at
//! `/api/data`. Every field is optional: the backend omits sensors it cannot
//! read, and absence renders as a placeholder rather than an error. Each poll
//! fully replaces the previous snapshot.

use serde::{Deserialize, Serialize};

/// One fetched telemetry object, representing system state at a poll instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// CPU temperature in °C.
    #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
    pub cpu_temp: Option<f64>,

    /// NVMe drive temperature in °C.
    #[serde(rename = "NVME", skip_serializing_if = "Option::is_none")]
    pub nvme_temp: Option<f64>,

    /// RP1 southbridge temperature in °C.
    #[serde(rename = "RP1", skip_serializing_if = "Option::is_none")]
    pub rp1_temp: Option<f64>,

    /// CPU usage in percent.
    #[serde(rename = "CPU_Usage", skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f64>,

    /// CPU fan speed in RPM (measured from the tachometer line).
    #[serde(rename = "Noctua A4x10", skip_serializing_if = "Option::is_none")]
    pub noctua_rpm: Option<f64>,

    /// Case fan speed in RPM (from hwmon).
    #[serde(rename = "System Fan", skip_serializing_if = "Option::is_none")]
    pub system_fan_rpm: Option<f64>,

    /// Power supply status string ("power ok", "low power", or other).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem_used: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem_total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_used: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_percent: Option<f64>,

    /// Pre-formatted uptime string (e.g. "3d 4h 12m").
    #[serde(rename = "Uptime", skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_containers: Option<u64>,

    /// Heaviest processes, ordered by the backend (CPU then memory).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_tasks: Vec<ProcessEntry>,

    /// Busiest containers, ordered by the backend.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_containers: Vec<ContainerEntry>,
}

impl TelemetrySnapshot {
    /// Power status parsed into the three-way enum.
    pub fn power(&self) -> Option<PowerStatus> {
        self.power_status.as_deref().map(PowerStatus::from_str)
    }
}

/// One row of the top-processes table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub pid: i64,
    pub cmd: String,
    /// CPU usage in percent.
    pub cpu: f64,
    /// Resident memory in MiB.
    pub mem: u64,
}

/// One row of the top-containers table. The stats collector may not have
/// produced numbers for a freshly started container yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory usage in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem: Option<f64>,
}

/// Power supply status reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    Ok,
    Low,
    Unknown,
}

impl PowerStatus {
    /// Parse the backend's status string. Anything unrecognized is Unknown.
    pub fn from_str(s: &str) -> Self {
        match s {
            "power ok" => PowerStatus::Ok,
            "low power" => PowerStatus::Low,
            _ => PowerStatus::Unknown,
        }
    }

    /// Badge text for display.
    pub fn label(&self) -> &'static str {
        match self {
            PowerStatus::Ok => "Power OK",
            PowerStatus::Low => "Low Power",
            PowerStatus::Unknown => "N/A",
        }
    }
}
