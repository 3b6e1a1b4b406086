//! Value formatting for display.
//!
//! Matches the formatting the monitor's web front-end used, so a terminal
//! and a browser pointed at the same backend read the same numbers.

/// Placeholder for metrics the backend did not report.
pub const PLACEHOLDER: &str = "-";

const BYTE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units and no space: 1073741824 -> "1GB".
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(BYTE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{}{}", value.round() as u64, BYTE_UNITS[exp])
}

/// Disk usage pair: "1GB / 10GB".
pub fn format_usage_pair(used: u64, total: u64) -> String {
    format!("{} / {}", format_bytes(used), format_bytes(total))
}

/// Memory usage pair in whole MiB: "487M / 3942M".
pub fn format_mem_pair(used: u64, total: u64) -> String {
    format!("{}M / {}M", to_mib(used), to_mib(total))
}

fn to_mib(bytes: u64) -> u64 {
    ((bytes as f64) / (1024.0 * 1024.0)).round() as u64
}

/// Temperature: rounded whole degrees, "-" when absent.
pub fn format_temp(temp: Option<f64>) -> String {
    match temp {
        Some(t) => format!("{}°C", t.round() as i64),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fan speed: integer RPM, "-" when absent.
pub fn format_rpm(rpm: Option<f64>) -> String {
    match rpm {
        Some(r) => format!("{} RPM", r.round() as i64),
        None => PLACEHOLDER.to_string(),
    }
}

/// Percentage with up to one decimal, trailing ".0" trimmed: "12.7%", "25%".
pub fn format_percent(pct: Option<f64>) -> String {
    match pct {
        Some(p) => {
            let rounded = (p * 10.0).round() / 10.0;
            if rounded.fract() == 0.0 {
                format!("{}%", rounded as i64)
            } else {
                format!("{rounded:.1}%")
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0B");
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(2048), "2KB");
        assert_eq!(format_bytes(1_073_741_824), "1GB");
        assert_eq!(format_bytes(10_737_418_240), "10GB");
        assert_eq!(format_bytes(1_099_511_627_776), "1TB");
    }

    #[test]
    fn test_disk_detail_pair() {
        // 1 GiB used of 10 GiB total
        assert_eq!(
            format_usage_pair(1_073_741_824, 10_737_418_240),
            "1GB / 10GB"
        );
    }

    #[test]
    fn test_mem_pair_in_mib() {
        assert_eq!(
            format_mem_pair(510_656_512, 4_133_552_128),
            "487M / 3942M"
        );
    }

    #[test]
    fn test_temp_and_rpm_placeholders() {
        assert_eq!(format_temp(Some(52.6)), "53°C");
        assert_eq!(format_temp(None), "-");
        assert_eq!(format_rpm(Some(1850.0)), "1850 RPM");
        assert_eq!(format_rpm(None), "-");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(Some(12.74)), "12.7%");
        assert_eq!(format_percent(Some(25.0)), "25%");
        assert_eq!(format_percent(None), "-");
    }
}
