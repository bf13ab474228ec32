//! Data source seam for the dashboard.
//!
//! The dashboard never talks to the network itself; it displays whatever a
//! [`FeedSource`] hands it. Implementations: [`crate::demo::DemoFeed`] for
//! generated data and [`crate::snapshot::SnapshotReader`] for snapshot files
//! exported from the backend.

use anyhow::Result;

use crate::model::DashboardSnapshot;

/// Something that can produce one complete dashboard refresh.
pub trait FeedSource: Send {
    /// Short human-readable source label for the status bar.
    fn name(&self) -> &str;

    /// Produces a fresh snapshot. Blocking; callers that must stay
    /// responsive run this on a background thread.
    fn fetch(&self) -> Result<DashboardSnapshot>;
}
