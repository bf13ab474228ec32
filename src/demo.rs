//! Generated demo data.
//!
//! Produces a plausible dashboard snapshot without a running backend: a
//! recent log feed across a handful of services, last-hour statistics that
//! agree with the generated logs, a 24h anomaly trend, and a few open
//! incidents. Useful for first-run experience, demos, and tests.

use anyhow::Result;
use chrono::{Duration, Timelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Anomaly, AnomalyStatus, DashboardSnapshot, LogEntry, LogLevel, Severity, StatsSummary,
    SystemStatus, TrendPoint,
};
use crate::source::FeedSource;

const SERVICES: [&str; 5] = ["api-server", "auth", "ingest", "search", "billing"];

const INFO_MESSAGES: [&str; 4] = [
    "Request completed in 42ms",
    "Health check passed",
    "Cache refreshed",
    "Session established",
];

const WARNING_MESSAGES: [&str; 3] = [
    "Slow query detected (1.8s)",
    "Retrying upstream call (attempt 2)",
    "Connection pool 80% utilized",
];

const ERROR_MESSAGES: [&str; 4] = [
    "Memory usage exceeded threshold",
    "Upstream timeout after 30s",
    "Failed to persist batch: broker unavailable",
    "GC failure, heap exhausted",
];

/// Tuning knobs for the generator.
#[derive(Debug, Clone)]
pub struct DemoFeedConfig {
    /// Number of log lines, all within the last hour.
    pub log_count: usize,
    /// Hours of anomaly trend history.
    pub trend_hours: usize,
    /// Number of anomaly detections.
    pub anomaly_count: usize,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for DemoFeedConfig {
    fn default() -> Self {
        Self {
            log_count: 120,
            trend_hours: 24,
            anomaly_count: 6,
            seed: None,
        }
    }
}

/// In-memory feed source producing generated data.
pub struct DemoFeed {
    config: DemoFeedConfig,
}

impl DemoFeed {
    pub fn new() -> Self {
        Self {
            config: DemoFeedConfig::default(),
        }
    }

    pub fn with_config(config: DemoFeedConfig) -> Self {
        Self { config }
    }

    /// Deterministic feed for tests and reproducible demo files.
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: DemoFeedConfig {
                seed: Some(seed),
                ..DemoFeedConfig::default()
            },
        }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for DemoFeed {
    fn name(&self) -> &str {
        "demo feed"
    }

    fn fetch(&self) -> Result<DashboardSnapshot> {
        let mut rng = self.rng();
        let now = Utc::now();

        // Log feed, newest first, all within the last hour.
        let mut logs: Vec<LogEntry> = (0..self.config.log_count)
            .map(|_| {
                let age_secs = rng.gen_range(0..3600);
                let roll = rng.gen_range(0..100);
                let level = if roll < 55 {
                    LogLevel::Info
                } else if roll < 70 {
                    LogLevel::Debug
                } else if roll < 85 {
                    LogLevel::Warning
                } else if roll < 96 {
                    LogLevel::Error
                } else {
                    LogLevel::Critical
                };

                let message = match level {
                    LogLevel::Warning => WARNING_MESSAGES[rng.gen_range(0..WARNING_MESSAGES.len())],
                    LogLevel::Error | LogLevel::Critical => {
                        ERROR_MESSAGES[rng.gen_range(0..ERROR_MESSAGES.len())]
                    }
                    _ => INFO_MESSAGES[rng.gen_range(0..INFO_MESSAGES.len())],
                };

                LogEntry {
                    timestamp: now - Duration::seconds(age_secs),
                    level,
                    service: SERVICES[rng.gen_range(0..SERVICES.len())].to_string(),
                    message: message.to_string(),
                }
            })
            .collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let anomalies: Vec<Anomaly> = (0..self.config.anomaly_count)
            .map(|i| {
                let age_secs = rng.gen_range(0..3600);
                let severity = match rng.gen_range(0..3) {
                    0 => Severity::Critical,
                    1 => Severity::Warning,
                    _ => Severity::Info,
                };
                let status = match rng.gen_range(0..4) {
                    0 => AnomalyStatus::Resolved,
                    1 => AnomalyStatus::Investigating,
                    _ => AnomalyStatus::Open,
                };
                Anomaly {
                    timestamp: now - Duration::seconds(age_secs),
                    template_id: format!("tpl-{:03}", rng.gen_range(1..200)),
                    anomaly_score: rng.gen_range(0.70..0.99),
                    is_anomaly: true,
                    severity,
                    status,
                    raw_message: ERROR_MESSAGES[i % ERROR_MESSAGES.len()].to_string(),
                    details: None,
                }
            })
            .collect();

        // Hourly trend buckets, oldest first, current hour last.
        let hour_start = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        let trend: Vec<TrendPoint> = (0..self.config.trend_hours)
            .rev()
            .map(|hours_back| TrendPoint {
                time: hour_start - Duration::hours(hours_back as i64),
                count: rng.gen_range(0..8),
            })
            .collect();

        // Summary numbers agree with the generated feed.
        let recent_errors = logs.iter().filter(|l| l.level.is_error()).count() as u64;
        let recent_anomalies = anomalies.len() as u64;
        let system_status = if recent_errors > self.config.log_count as u64 / 5 {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Ok(DashboardSnapshot {
            generated_at: now,
            logs,
            stats: StatsSummary {
                recent_errors,
                recent_anomalies,
                system_status,
            },
            trend,
            anomalies,
        })
    }
}
