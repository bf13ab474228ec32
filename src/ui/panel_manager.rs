//! Panel orchestration and layout management.
//!
//! Coordinates the sidebar, header, active view panel, and status bar, and
//! funnels panel interactions back to the application coordinator.

use eframe::egui;
use logai::AnomalyStatus;

use crate::app::{AppState, ThemeCoordinator};
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::state::View;
use crate::ui::{
    anomalies_panel, chat_panel, header, logs_panel, overview_panel, settings_panel, sidebar,
    status_bar,
};

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User requested to open a snapshot file
    OpenSnapshotRequested(std::path::PathBuf),
    /// User requested demo data
    DemoFeedRequested,
    /// User requested a data refresh
    RefreshRequested,
    /// User submitted a chat draft
    ChatSubmitted,
    /// User changed an anomaly's triage status
    AnomalyStatusChanged { index: usize, status: AnomalyStatus },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        Self::handle_shortcuts(ctx, state);

        // Palette snapshot for this frame's custom-painted elements
        let theme_colors = color_mapping::theme_colors(state.prefs.value()).clone();

        // Navigation sidebar on the left
        let sidebar_width = if state.nav.sidebar_expanded() { 170.0 } else { 44.0 };
        egui::SidePanel::left("sidebar")
            .exact_width(sidebar_width)
            .resizable(false)
            .show(ctx, |ui| {
                sidebar::render_sidebar(ui, state);
            });

        // Header at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenSnapshotRequested(path) => {
                        PanelInteraction::OpenSnapshotRequested(path)
                    }
                    header::HeaderInteraction::DemoFeedRequested => {
                        PanelInteraction::DemoFeedRequested
                    }
                    header::HeaderInteraction::RefreshRequested => {
                        PanelInteraction::RefreshRequested
                    }
                });
            }
        });

        // Status bar at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        // Active view fills the center
        let view_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(view_frame).show(ctx, |ui| {
            match state.nav.active() {
                View::Overview => overview_panel::render_overview_panel(ui, state, &theme_colors),
                View::Logs => logs_panel::render_logs_panel(ui, state, &theme_colors),
                View::Anomalies => {
                    if let Some(anomalies_panel::AnomaliesInteraction::StatusChanged {
                        index,
                        status,
                    }) = anomalies_panel::render_anomalies_panel(ui, state, &theme_colors)
                    {
                        interaction =
                            Some(PanelInteraction::AnomalyStatusChanged { index, status });
                    }
                }
                View::Chat => {
                    if let Some(chat_panel::ChatInteraction::Submitted) =
                        chat_panel::render_chat_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(PanelInteraction::ChatSubmitted);
                    }
                }
                View::Settings => settings_panel::render_settings_panel(ui, state, &theme_colors),
            }
        });

        interaction
    }

    /// Global keyboard shortcuts: Ctrl+T toggles the theme, Ctrl+1..5
    /// switch views.
    fn handle_shortcuts(ctx: &egui::Context, state: &mut AppState) {
        let toggle_theme = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::COMMAND, egui::Key::T)
        });
        if toggle_theme {
            ThemeCoordinator::toggle(state);
        }

        let keys = [
            (egui::Key::Num1, View::Overview),
            (egui::Key::Num2, View::Logs),
            (egui::Key::Num3, View::Anomalies),
            (egui::Key::Num4, View::Chat),
            (egui::Key::Num5, View::Settings),
        ];
        for (key, view) in keys {
            if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, key)) {
                state.nav.select(view);
            }
        }
    }
}
