//! Typed contracts for the LogAi REST API.
//!
//! These types mirror the JSON payloads served by the LogAi backend
//! (`/api/v1/logs`, `/api/v1/stats/*`, `/api/v1/analysis/anomalies`,
//! `/api/v1/chat`, `/api/v1/settings`). Field names and enum literals match
//! the wire format exactly so snapshots exported from the backend
//! deserialize without translation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log severity level as stored in the backend's `logs` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// True for levels that count toward the error statistics.
    pub fn is_error(self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Critical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }
}

/// A single log line as returned by `GET /api/v1/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub service: String,
    pub message: String,
}

/// Overall backend health as reported in the stats summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SystemStatus {
    Healthy,
    Degraded,
    Down,
}

impl SystemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemStatus::Healthy => "HEALTHY",
            SystemStatus::Degraded => "DEGRADED",
            SystemStatus::Down => "DOWN",
        }
    }
}

/// Response of `GET /api/v1/stats/summary`: last-hour error and anomaly counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub recent_errors: u64,
    pub recent_anomalies: u64,
    pub system_status: SystemStatus,
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self {
            recent_errors: 0,
            recent_anomalies: 0,
            system_status: SystemStatus::Healthy,
        }
    }
}

/// One hourly bucket of the 24h anomaly trend (`GET /api/v1/stats/trend`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub time: DateTime<Utc>,
    pub count: u64,
}

/// Severity assigned by the anomaly detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Incident triage state, updated through the analysis endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyStatus {
    Open,
    Investigating,
    Resolved,
}

impl AnomalyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AnomalyStatus::Open => "open",
            AnomalyStatus::Investigating => "investigating",
            AnomalyStatus::Resolved => "resolved",
        }
    }

    /// All triage states, in workflow order. Used by the status selector.
    pub const ALL: [AnomalyStatus; 3] = [
        AnomalyStatus::Open,
        AnomalyStatus::Investigating,
        AnomalyStatus::Resolved,
    ];
}

/// One detection from `GET /api/v1/analysis/anomalies`, joined with the
/// original log message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub timestamp: DateTime<Utc>,
    pub template_id: String,
    pub anomaly_score: f64,
    pub is_anomaly: bool,
    pub severity: Severity,
    pub status: AnomalyStatus,
    pub raw_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn in the analysis chat (`POST /api/v1/chat` request history and
/// response transcript share this shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Application settings mirroring the backend settings endpoint.
///
/// The backend contract additionally carries a `theme` field; it is omitted
/// here on purpose. The active theme is owned by
/// [`crate::preferences::PreferenceStore`] and persisting a second copy of it
/// would create a competing source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub llm_provider: String,
    pub embedding_provider: String,
    pub anomaly_threshold: f64,
    pub notifications_enabled: bool,
    pub auto_refresh: bool,
    /// Auto refresh period in seconds.
    pub refresh_interval: u32,
    pub log_storage_policy: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            llm_provider: "vllm".to_string(),
            embedding_provider: "local".to_string(),
            anomaly_threshold: 0.7,
            notifications_enabled: true,
            auto_refresh: true,
            refresh_interval: 30,
            log_storage_policy: "7d".to_string(),
        }
    }
}

/// Everything one dashboard refresh displays, and the on-disk snapshot format
/// written by `logai-feedgen`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub logs: Vec<LogEntry>,
    pub stats: StatsSummary,
    pub trend: Vec<TrendPoint>,
    pub anomalies: Vec<Anomaly>,
}
