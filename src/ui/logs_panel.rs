//! Logs panel rendering.
//!
//! Shows the log feed as a scrollable table, filtered by the header's
//! service filter, with level-colored labels.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::domain::filtering;
use crate::presentation::color_mapping::{self, ThemeColors};

pub fn render_logs_panel(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    let Some(snapshot) = state.data.snapshot() else {
        ui.label(RichText::new(state.i18n.t("overview.empty")).color(colors.text_dim));
        return;
    };

    let visible = filtering::filter_log_indices(&snapshot.logs, state.data.service_filter());
    if visible.is_empty() {
        ui.label(RichText::new(state.i18n.t("logs.empty")).color(colors.text_dim));
        return;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        egui::Grid::new("logs_grid")
            .num_columns(4)
            .striped(true)
            .min_col_width(60.0)
            .show(ui, |ui| {
                ui.label(RichText::new(state.i18n.t("logs.col_time")).strong());
                ui.label(RichText::new(state.i18n.t("logs.col_level")).strong());
                ui.label(RichText::new(state.i18n.t("logs.col_service")).strong());
                ui.label(RichText::new(state.i18n.t("logs.col_message")).strong());
                ui.end_row();

                for &i in &visible {
                    let entry = &snapshot.logs[i];
                    ui.label(
                        RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                            .color(colors.text_dim)
                            .monospace(),
                    );
                    ui.label(
                        RichText::new(entry.level.as_str())
                            .color(color_mapping::level_color(entry.level, colors))
                            .strong(),
                    );
                    ui.label(&entry.service);
                    ui.label(&entry.message);
                    ui.end_row();
                }
            });
    });
}
