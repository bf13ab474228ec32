//! Anomalies panel rendering.
//!
//! Lists detections above the configured score threshold with severity
//! badges and a triage status selector per incident.

use eframe::egui;
use egui::RichText;
use logai::AnomalyStatus;

use crate::app::AppState;
use crate::presentation::color_mapping::{self, ThemeColors};

/// Interaction produced by the anomalies panel.
pub enum AnomaliesInteraction {
    StatusChanged { index: usize, status: AnomalyStatus },
}

pub fn render_anomalies_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    colors: &ThemeColors,
) -> Option<AnomaliesInteraction> {
    let mut interaction = None;

    let Some(snapshot) = state.data.snapshot() else {
        ui.label(RichText::new(state.i18n.t("overview.empty")).color(colors.text_dim));
        return None;
    };

    let threshold = state.settings.values().anomaly_threshold;
    let visible: Vec<usize> = snapshot
        .anomalies
        .iter()
        .enumerate()
        .filter(|(_, a)| a.anomaly_score >= threshold)
        .map(|(i, _)| i)
        .collect();

    if visible.is_empty() {
        ui.label(RichText::new(state.i18n.t("anomalies.empty")).color(colors.text_dim));
        return None;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for &i in &visible {
            let anomaly = &snapshot.anomalies[i];

            egui::Frame::default()
                .fill(colors.extreme_background)
                .inner_margin(egui::Margin::same(8))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(anomaly.severity.as_str().to_uppercase())
                                .color(color_mapping::severity_color(anomaly.severity, colors))
                                .strong(),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} {:.2}",
                                state.i18n.t("anomalies.score"),
                                anomaly.anomaly_score
                            ))
                            .color(colors.text_dim),
                        );
                        ui.label(RichText::new(&anomaly.template_id).monospace().color(colors.text_dim));

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut current = anomaly.status;
                            egui::ComboBox::from_id_salt(("anomaly_status", i))
                                .selected_text(
                                    RichText::new(current.as_str())
                                        .color(color_mapping::status_color(current, colors)),
                                )
                                .show_ui(ui, |ui| {
                                    for status in AnomalyStatus::ALL {
                                        ui.selectable_value(&mut current, status, status.as_str());
                                    }
                                });
                            if current != anomaly.status {
                                interaction = Some(AnomaliesInteraction::StatusChanged {
                                    index: i,
                                    status: current,
                                });
                            }
                            ui.label(state.i18n.t("anomalies.status"));
                        });
                    });

                    ui.label(&anomaly.raw_message);
                    if let Some(details) = &anomaly.details {
                        ui.label(RichText::new(details).color(colors.text_dim));
                    }
                    ui.label(
                        RichText::new(anomaly.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
                            .small()
                            .color(colors.text_dim),
                    );
                });
            ui.add_space(6.0);
        }
    });

    interaction
}
