//! Header panel UI rendering
//!
//! Handles the top bar with the active view title, data source controls,
//! and the log service filter.

use eframe::egui;
use egui::{Color32, RichText};
use std::path::PathBuf;

use crate::app::AppState;
use crate::state::View;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a snapshot file to open
    OpenSnapshotRequested(PathBuf),
    /// User clicked the demo feed button
    DemoFeedRequested,
    /// User clicked refresh
    RefreshRequested,
}

/// Renders the application header.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let view = state.nav.active();
        ui.label(
            RichText::new(format!("{} {}", view.icon(), state.i18n.t(view.label_key()))).heading(),
        );

        ui.separator();

        if ui.button(format!("📁 {}", state.i18n.t("header.open_snapshot"))).clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Dashboard Snapshots", &["json", "br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenSnapshotRequested(path));
            }
        }

        if ui.button(format!("🔮 {}", state.i18n.t("header.demo_feed"))).clicked() {
            interaction = Some(HeaderInteraction::DemoFeedRequested);
        }

        if state.data.snapshot().is_some()
            && ui.button(format!("⟳ {}", state.i18n.t("header.refresh"))).clicked()
        {
            interaction = Some(HeaderInteraction::RefreshRequested);
        }

        // Service filter applies to the logs view
        if state.nav.active() == View::Logs {
            ui.separator();
            ui.label(state.i18n.t("header.filter"));
            egui::TextEdit::singleline(state.data.service_filter_mut())
                .desired_width(140.0)
                .hint_text("api-server")
                .show(ui);
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
