//! Application-level coordination and workflow management.
//!
//! Handles data loading workflows, auto refresh, chat turns, and error
//! states, keeping the eframe update loop thin.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use logai::DashboardSnapshot;
use tracing::info;

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};

/// Source label used for generated data; auto refresh only regenerates
/// this source, never a snapshot file the user opened.
const DEMO_SOURCE: &str = "demo feed";

pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous snapshot loading from a file.
    pub fn open_snapshot(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.error_message = None;
        loader.start_snapshot_load(path, ctx);
    }

    /// Generates and installs a demo snapshot in-memory.
    pub fn load_demo_feed(state: &mut AppState, loader: &mut AsyncLoader) {
        match loader.load_demo_feed() {
            Ok(snapshot) => {
                Self::install_snapshot(state, snapshot, DEMO_SOURCE.to_string());
            }
            Err(e) => {
                state.error_message = Some(format!("Error generating demo feed: {}", e));
            }
        }
    }

    /// Checks for loading completion and applies results to application
    /// state. Called once per frame in the update loop.
    ///
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success {
                snapshot,
                source_name,
            } => {
                Self::install_snapshot(state, snapshot, source_name);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading snapshot: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Re-fetches from the current source: re-reads an opened snapshot
    /// file, or regenerates the demo feed.
    pub fn refresh(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        ctx: &egui::Context,
    ) {
        let file_source = match state.data.source_name() {
            Some(name) if name != DEMO_SOURCE => Some(PathBuf::from(name)),
            _ => None,
        };
        match file_source {
            Some(path) => Self::open_snapshot(state, loader, path, ctx),
            None => Self::load_demo_feed(state, loader),
        }
    }

    /// Regenerates the demo feed when auto refresh is enabled and the
    /// refresh interval has elapsed.
    ///
    /// Opened snapshot files are never refreshed away; the user chose them
    /// explicitly.
    pub fn maybe_auto_refresh(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        if !state.settings.values().auto_refresh {
            return false;
        }
        if state.data.source_name() != Some(DEMO_SOURCE) {
            return false;
        }
        let Some(last) = state.data.last_refresh() else {
            return false;
        };

        let interval = Duration::seconds(i64::from(state.settings.values().refresh_interval));
        if Utc::now().signed_duration_since(last) < interval {
            return false;
        }

        info!("auto refresh: regenerating demo feed");
        Self::load_demo_feed(state, loader);
        true
    }

    /// Handles a submitted chat draft: appends the user turn and an
    /// offline analysis answer composed from the loaded snapshot.
    pub fn submit_chat(state: &mut AppState) {
        let Some(question) = state.chat.take_draft() else {
            return;
        };

        let reply = match state.data.snapshot() {
            Some(snapshot) => Self::compose_reply(&question, snapshot),
            None => "No data is loaded yet. Open a snapshot or start the demo feed, \
                     then ask again."
                .to_string(),
        };
        state.chat.push_assistant(reply);
    }

    /// Builds a summary answer with source log lines, in the shape the
    /// backend chat endpoint returns (markdown answer plus quoted sources).
    fn compose_reply(question: &str, snapshot: &DashboardSnapshot) -> String {
        let open_incidents = snapshot
            .anomalies
            .iter()
            .filter(|a| a.status != logai::AnomalyStatus::Resolved)
            .count();

        let busiest = Self::busiest_error_service(snapshot);

        let mut reply = format!(
            "### Analysis\nRe: \"{}\"\n\nIn the last hour I see {} error-level \
             log lines and {} anomalies ({} unresolved). System status: {}.",
            question,
            snapshot.stats.recent_errors,
            snapshot.stats.recent_anomalies,
            open_incidents,
            snapshot.stats.system_status.as_str(),
        );

        if let Some((service, count)) = busiest {
            reply.push_str(&format!(
                " The most affected service is `{}` ({} errors).",
                service, count
            ));
        }

        let sources: Vec<String> = snapshot
            .logs
            .iter()
            .filter(|l| l.level.is_error())
            .take(3)
            .map(|l| {
                format!(
                    "[{}] {} {}: {}",
                    l.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
                    l.level.as_str(),
                    l.service,
                    l.message
                )
            })
            .collect();

        if !sources.is_empty() {
            reply.push_str("\n\nSources:\n");
            for source in sources {
                reply.push_str(&format!("- {}\n", source));
            }
        }

        reply
    }

    fn busiest_error_service(snapshot: &DashboardSnapshot) -> Option<(String, usize)> {
        use std::collections::HashMap;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for log in snapshot.logs.iter().filter(|l| l.level.is_error()) {
            *counts.entry(log.service.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(service, count)| (service.to_string(), count))
    }

    fn install_snapshot(state: &mut AppState, snapshot: DashboardSnapshot, source_name: String) {
        state.data.install(snapshot, source_name);
        state.error_message = None;
    }
}
