//! Loaded dashboard data and its provenance.

use chrono::{DateTime, Utc};
use logai::DashboardSnapshot;

/// State related to the currently displayed snapshot.
///
/// Responsibilities:
/// - Holding the loaded snapshot and where it came from
/// - Tracking when the data was last refreshed
/// - Holding the log service filter text
pub struct DataState {
    snapshot: Option<DashboardSnapshot>,
    source_name: Option<String>,
    last_refresh: Option<DateTime<Utc>>,
    service_filter: String,
}

impl Default for DataState {
    fn default() -> Self {
        Self::new()
    }
}

impl DataState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            source_name: None,
            last_refresh: None,
            service_filter: String::new(),
        }
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    pub fn service_filter(&self) -> &str {
        &self.service_filter
    }

    pub fn service_filter_mut(&mut self) -> &mut String {
        &mut self.service_filter
    }

    /// Installs a freshly fetched snapshot.
    pub fn install(&mut self, snapshot: DashboardSnapshot, source_name: String) {
        self.snapshot = Some(snapshot);
        self.source_name = Some(source_name);
        self.last_refresh = Some(Utc::now());
    }

    /// Updates the triage status of one anomaly in place.
    pub fn set_anomaly_status(&mut self, index: usize, status: logai::AnomalyStatus) {
        if let Some(snapshot) = &mut self.snapshot {
            if let Some(anomaly) = snapshot.anomalies.get_mut(index) {
                anomaly.status = status;
            }
        }
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
        self.source_name = None;
        self.last_refresh = None;
    }
}
