//! Chat panel rendering.
//!
//! Transcript above, draft input below. Submission is routed through the
//! application coordinator, which composes the answer.

use eframe::egui;
use egui::RichText;
use logai::ChatRole;

use crate::app::AppState;
use crate::presentation::color_mapping::ThemeColors;

/// Interaction produced by the chat panel.
pub enum ChatInteraction {
    /// User submitted the draft (button or Enter)
    Submitted,
}

pub fn render_chat_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<ChatInteraction> {
    let mut interaction = None;

    // Input row at the bottom, transcript filling the rest
    egui::TopBottomPanel::bottom("chat_input")
        .show_separator_line(false)
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                let send_label = state.i18n.t("chat.send").to_string();
                let hint = state.i18n.t("chat.placeholder").to_string();

                let response = egui::TextEdit::singleline(state.chat.draft_mut())
                    .desired_width(ui.available_width() - 80.0)
                    .hint_text(hint)
                    .show(ui);

                let enter_pressed =
                    response.response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let send_clicked = ui.button(send_label).clicked();

                if enter_pressed || send_clicked {
                    interaction = Some(ChatInteraction::Submitted);
                }
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        if state.chat.messages().is_empty() {
            ui.label(RichText::new(state.i18n.t("chat.empty")).color(colors.text_dim));
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in state.chat.messages() {
                    let (prefix, color) = match message.role {
                        ChatRole::User => ("You", colors.accent),
                        ChatRole::Assistant => ("LogAi", colors.success),
                    };
                    ui.label(RichText::new(prefix).strong().color(color));
                    ui.label(&message.content);
                    ui.add_space(8.0);
                }
            });
    });

    interaction
}
