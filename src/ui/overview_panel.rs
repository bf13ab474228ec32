//! Overview panel rendering.
//!
//! Stat tiles for the last-hour summary and a painted bar chart of the 24h
//! anomaly trend.

use eframe::egui;
use egui::{Color32, Rect, RichText, Vec2};

use crate::app::AppState;
use crate::presentation::color_mapping::{self, ThemeColors};
use crate::utils::format_count;

pub fn render_overview_panel(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    let Some(snapshot) = state.data.snapshot() else {
        ui.label(RichText::new(state.i18n.t("overview.empty")).color(colors.text_dim));
        return;
    };

    ui.horizontal(|ui| {
        stat_tile(
            ui,
            state.i18n.t("overview.recent_errors"),
            &format_count(snapshot.stats.recent_errors),
            colors.error,
            colors,
        );
        stat_tile(
            ui,
            state.i18n.t("overview.recent_anomalies"),
            &format_count(snapshot.stats.recent_anomalies),
            colors.warning,
            colors,
        );
        stat_tile(
            ui,
            state.i18n.t("overview.system_status"),
            snapshot.stats.system_status.as_str(),
            color_mapping::system_status_color(snapshot.stats.system_status, colors),
            colors,
        );
    });

    ui.add_space(12.0);
    ui.label(RichText::new(state.i18n.t("overview.trend")).strong());
    ui.add_space(4.0);
    render_trend_bars(ui, snapshot, colors);
}

/// One boxed metric with a colored value.
fn stat_tile(ui: &mut egui::Ui, label: &str, value: &str, value_color: Color32, colors: &ThemeColors) {
    egui::Frame::default()
        .fill(colors.extreme_background)
        .inner_margin(egui::Margin::same(10))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_min_width(130.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).small().color(colors.text_dim));
                ui.label(RichText::new(value).heading().color(value_color));
            });
        });
}

/// Paints the hourly anomaly counts as vertical bars, oldest on the left.
fn render_trend_bars(ui: &mut egui::Ui, snapshot: &logai::DashboardSnapshot, colors: &ThemeColors) {
    let trend = &snapshot.trend;
    if trend.is_empty() {
        ui.label(RichText::new("-").color(colors.text_dim));
        return;
    }

    let max_count = trend.iter().map(|p| p.count).max().unwrap_or(0).max(1);
    let chart_height = 80.0;
    let bar_gap = 2.0;

    let (response, painter) = ui.allocate_painter(
        Vec2::new(ui.available_width().min(600.0), chart_height),
        egui::Sense::hover(),
    );
    let rect = response.rect;
    let bar_width = (rect.width() - bar_gap * (trend.len() as f32 - 1.0)) / trend.len() as f32;

    for (i, point) in trend.iter().enumerate() {
        let height = (point.count as f32 / max_count as f32) * (chart_height - 14.0);
        let x = rect.left() + i as f32 * (bar_width + bar_gap);
        let bar = Rect::from_min_max(
            egui::pos2(x, rect.bottom() - height),
            egui::pos2(x + bar_width, rect.bottom()),
        );
        painter.rect_filled(bar, 1.0, colors.accent);
    }

    if response.hovered() {
        response.on_hover_text(format!(
            "peak {} anomalies/hour over the last {} hours",
            max_count,
            trend.len()
        ));
    }
}
