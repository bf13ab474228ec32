pub mod demo;
pub mod i18n;
pub mod model;
pub mod preferences;
pub mod snapshot;
pub mod source;

// Export API contracts
pub use model::{
    Anomaly, AnomalyStatus, ChatMessage, ChatRole, DashboardSettings, DashboardSnapshot,
    LogEntry, LogLevel, Severity, StatsSummary, SystemStatus, TrendPoint,
};

// Export preference subsystem
pub use preferences::{
    system_prefers_dark, Preference, PreferenceError, PreferenceStore, ThemePreference,
};

// Export data sources
pub use demo::{DemoFeed, DemoFeedConfig};
pub use snapshot::{write_snapshot, SnapshotReader};
pub use source::FeedSource;

// Export localization
pub use i18n::{I18n, Locale};
