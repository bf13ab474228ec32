//! Status bar UI rendering
//!
//! Bottom bar with process memory, data source provenance, and counts.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::utils::{format_count, format_memory_mb, format_relative, get_current_memory_mb};

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());

        if loader.is_loading() {
            ui.spinner();
            ui.label(state.i18n.t("status.loading"));
            return;
        }

        match state.data.snapshot() {
            Some(snapshot) => {
                let source = state.data.source_name().unwrap_or("?");
                ui.label(RichText::new(format!(
                    "{} | {} logs | {} anomalies",
                    source,
                    format_count(snapshot.logs.len() as u64),
                    format_count(snapshot.anomalies.len() as u64),
                ))
                .strong());

                if let Some(last) = state.data.last_refresh() {
                    ui.label(format!(
                        "{} {}",
                        state.i18n.t("status.updated"),
                        format_relative(last)
                    ));
                }
            }
            None => {
                ui.label(state.i18n.t("status.no_source"));
            }
        }
    });
}
