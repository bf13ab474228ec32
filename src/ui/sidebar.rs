//! Navigation sidebar rendering.
//!
//! Renders the route list and the theme toggle. Both the row highlight and
//! the toggle's icon branch on the store's current preference; neither keeps
//! a copy of it.

use eframe::egui;
use egui::RichText;
use logai::ThemePreference;

use crate::app::{AppState, ThemeCoordinator};
use crate::presentation::color_mapping;
use crate::state::View;

/// Renders the navigation sidebar.
///
/// Mutates navigation state directly; theme changes go through the
/// coordinator so the store stays the only mutation path.
pub fn render_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    let colors = color_mapping::theme_colors(state.prefs.value());
    let expanded = state.nav.sidebar_expanded();

    ui.vertical(|ui| {
        ui.add_space(4.0);

        if expanded {
            ui.label(RichText::new(state.i18n.t("app.title")).strong().color(colors.accent));
        } else {
            ui.label(RichText::new("⬢").color(colors.accent));
        }
        ui.separator();

        for view in View::ALL {
            let selected = state.nav.active() == view;
            let label = if expanded {
                format!("{} {}", view.icon(), state.i18n.t(view.label_key()))
            } else {
                view.icon().to_string()
            };

            let text = if selected {
                RichText::new(label).strong().color(colors.accent)
            } else {
                RichText::new(label)
            };

            if ui.selectable_label(selected, text).clicked() {
                state.nav.select(view);
            }
        }

        // Collapse control and theme toggle pinned to the bottom
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(4.0);

            let toggle_icon = match state.prefs.value() {
                ThemePreference::Dark => "☀",
                ThemePreference::Light => "🌙",
            };
            if ui.button(toggle_icon).on_hover_text("Toggle theme (Ctrl+T)").clicked() {
                ThemeCoordinator::toggle(state);
            }

            let collapse_icon = if expanded { "⏴" } else { "⏵" };
            if ui.button(collapse_icon).clicked() {
                state.nav.toggle_sidebar();
            }
        });
    });
}
