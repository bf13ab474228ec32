//! Settings panel rendering.
//!
//! Edits dashboard settings in place. The theme row is the one exception:
//! it never touches the settings values and instead routes through the
//! preference store, which owns the theme.

use eframe::egui;
use egui::RichText;
use logai::{Locale, ThemePreference};

use crate::app::{AppState, ThemeCoordinator};
use crate::presentation::color_mapping::ThemeColors;

pub fn render_settings_panel(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([24.0, 10.0])
        .show(ui, |ui| {
            // Theme, owned by the preference store
            ui.label(state.i18n.t("settings.theme"));
            ui.horizontal(|ui| {
                let current = state.prefs.value();
                let dark_label = state.i18n.t("settings.theme_dark");
                let light_label = state.i18n.t("settings.theme_light");
                if ui
                    .selectable_label(current == ThemePreference::Dark, dark_label)
                    .clicked()
                {
                    ThemeCoordinator::select(state, ThemePreference::Dark);
                }
                if ui
                    .selectable_label(current == ThemePreference::Light, light_label)
                    .clicked()
                {
                    ThemeCoordinator::select(state, ThemePreference::Light);
                }
            });
            ui.end_row();

            ui.label(state.i18n.t("settings.language"));
            ui.horizontal(|ui| {
                let mut locale = state.i18n.locale();
                for candidate in Locale::ALL {
                    ui.selectable_value(&mut locale, candidate, candidate.label());
                }
                if locale != state.i18n.locale() {
                    state.i18n.set_locale(locale);
                }
            });
            ui.end_row();

            ui.label(state.i18n.t("settings.llm_provider"));
            egui::TextEdit::singleline(&mut state.settings.values_mut().llm_provider)
                .desired_width(160.0)
                .show(ui);
            ui.end_row();

            ui.label(state.i18n.t("settings.embedding_provider"));
            egui::TextEdit::singleline(&mut state.settings.values_mut().embedding_provider)
                .desired_width(160.0)
                .show(ui);
            ui.end_row();

            // Numeric fields edit text buffers, committed on focus loss
            ui.label(state.i18n.t("settings.anomaly_threshold"));
            let threshold_response = egui::TextEdit::singleline(state.settings.threshold_text_mut())
                .desired_width(80.0)
                .show(ui);
            ui.end_row();

            ui.label(state.i18n.t("settings.refresh_interval"));
            let interval_response = egui::TextEdit::singleline(state.settings.interval_text_mut())
                .desired_width(80.0)
                .show(ui);
            ui.end_row();

            if threshold_response.response.lost_focus() || interval_response.response.lost_focus() {
                state.settings.commit_text_fields();
            }

            ui.label(state.i18n.t("settings.auto_refresh"));
            let mut auto_refresh = state.settings.values().auto_refresh;
            if ui.checkbox(&mut auto_refresh, "").changed() {
                state.settings.values_mut().auto_refresh = auto_refresh;
            }
            ui.end_row();

            ui.label(state.i18n.t("settings.notifications"));
            let mut notifications = state.settings.values().notifications_enabled;
            if ui.checkbox(&mut notifications, "").changed() {
                state.settings.values_mut().notifications_enabled = notifications;
            }
            ui.end_row();

            ui.label(state.i18n.t("settings.log_policy"));
            egui::TextEdit::singleline(&mut state.settings.values_mut().log_storage_policy)
                .desired_width(80.0)
                .show(ui);
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.label(
        RichText::new("Settings persist with the window; the theme persists per user.")
            .small()
            .color(colors.text_dim),
    );
}
