//! Log feed filtering.

use logai::LogEntry;

/// Returns indices of log entries matching the service filter.
///
/// The filter matches case-insensitively against the service name; a
/// blank filter matches everything. Indices preserve feed order so the
/// panel can render without cloning entries.
pub fn filter_log_indices(logs: &[LogEntry], service_filter: &str) -> Vec<usize> {
    let needle = service_filter.trim().to_lowercase();
    logs.iter()
        .enumerate()
        .filter(|(_, entry)| needle.is_empty() || entry.service.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use logai::LogLevel;

    fn entry(service: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            service: service.to_string(),
            message: "msg".to_string(),
        }
    }

    #[test]
    fn test_blank_filter_matches_everything() {
        let logs = vec![entry("api-server"), entry("auth")];
        assert_eq!(filter_log_indices(&logs, ""), vec![0, 1]);
        assert_eq!(filter_log_indices(&logs, "   "), vec![0, 1]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let logs = vec![entry("api-server"), entry("auth"), entry("search")];
        assert_eq!(filter_log_indices(&logs, "API"), vec![0]);
        assert_eq!(filter_log_indices(&logs, "ar"), vec![2]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let logs = vec![entry("api-server")];
        assert!(filter_log_indices(&logs, "billing").is_empty());
    }
}
