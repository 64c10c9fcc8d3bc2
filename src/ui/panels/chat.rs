// VCScout - ui/panels/chat.rs
//
// Chat overlay: transcript, "Thinking..." indicator, error banner, and the
// input row. Sending only raises a request on AppState.

use crate::app::state::AppState;
use crate::core::model::Sender;
use crate::ui::{text, theme};

/// Render the chat window (if `state.chat_open` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.chat_open {
        return;
    }

    let mut open = true;
    egui::Window::new("\u{1f4ac} VC Assistant")
        .open(&mut open)
        .collapsible(true)
        .resizable(true)
        .default_size([theme::CHAT_WINDOW_WIDTH, theme::CHAT_WINDOW_HEIGHT])
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -40.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.small_button("New conversation").clicked() {
                    state.chat.new_conversation();
                }
            });
            ui.separator();

            let input_height = 64.0;
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - input_height).max(120.0))
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for turn in state.chat.transcript.turns() {
                        let (align, fill) = match turn.sender {
                            Sender::User => (egui::Align::Max, theme::ACCENT),
                            Sender::Bot => (egui::Align::Min, theme::BOT_BUBBLE),
                        };
                        ui.with_layout(egui::Layout::top_down(align), |ui| {
                            egui::Frame::new()
                                .fill(fill)
                                .corner_radius(8.0)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.set_max_width(theme::CHAT_WINDOW_WIDTH * 0.8);
                                    ui.label(
                                        egui::RichText::new(&turn.text).color(egui::Color32::WHITE),
                                    );
                                });
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} \u{00b7} {}",
                                    turn.sender.label(),
                                    text::turn_time(&turn.timestamp)
                                ))
                                .small()
                                .weak(),
                            );
                        });
                        ui.add_space(4.0);
                    }

                    if state.chat.is_waiting() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(egui::RichText::new("Thinking...").italics().weak());
                        });
                    }
                });

            if let Some(err) = state.chat.error.as_deref() {
                ui.label(egui::RichText::new(err).color(theme::ERROR_TEXT));
            }

            ui.separator();
            let waiting = state.chat.is_waiting();
            ui.horizontal(|ui| {
                let response = ui.add_enabled(
                    !waiting,
                    egui::TextEdit::singleline(&mut state.chat.input)
                        .hint_text("Ask about VCs, industries, or firms...")
                        .desired_width(theme::CHAT_WINDOW_WIDTH - 80.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !waiting && !state.chat.input.trim().is_empty();
                let clicked = ui.add_enabled(can_send, egui::Button::new("Send")).clicked();
                if can_send && (clicked || submitted) {
                    state.request_chat_send();
                }
            });
        });

    if !open {
        state.chat_open = false;
    }
}
