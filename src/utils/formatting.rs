//! Text formatting helpers for the dashboard.

use chrono::{DateTime, Utc};
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a count with thousands separators, e.g. `1234567` as
/// `"1,234,567"`.
pub fn format_count(count: u64) -> String {
    let s = count.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB for the status bar.
pub fn format_memory_mb(mb: f64) -> String {
    format!("Mem: {:.0} MB", mb)
}

/// Formats how long ago `instant` was, relative to now.
///
/// Sub-minute ages render in seconds, then minutes, then hours. Future
/// timestamps (clock skew in imported snapshots) render as "now".
pub fn format_relative(instant: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(instant);
    let secs = elapsed.num_seconds();
    if secs < 0 {
        return "now".to_string();
    }
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(127.6), "Mem: 128 MB");
    }

    #[test]
    fn test_format_relative_buckets() {
        let now = Utc::now();
        assert!(format_relative(now - Duration::seconds(5)).ends_with("s ago"));
        assert!(format_relative(now - Duration::seconds(120)).ends_with("m ago"));
        assert!(format_relative(now - Duration::hours(3)).ends_with("h ago"));
        assert_eq!(format_relative(now + Duration::seconds(30)), "now");
    }

    #[test]
    fn test_memory_query_does_not_panic() {
        assert!(get_current_memory_mb() >= 0.0);
    }
}
