// VCScout - gui.rs
//
// Top-level eframe::App implementation.
// Wires the panels together and moves requests between AppState and the
// background managers.

use crate::app::chat::ChatManager;
use crate::app::health::HealthCheck;
use crate::app::search::SearchManager;
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;
use std::time::Duration;

/// The VCScout application.
pub struct VcScoutApp {
    pub state: AppState,
    pub search_manager: SearchManager,
    pub chat_manager: ChatManager,
    pub health_check: HealthCheck,
}

impl VcScoutApp {
    pub fn new(
        state: AppState,
        search_manager: SearchManager,
        chat_manager: ChatManager,
        health_check: HealthCheck,
    ) -> Self {
        Self {
            state,
            search_manager,
            chat_manager,
            health_check,
        }
    }

    /// Drain finished background work into state.
    fn poll_managers(&mut self) -> bool {
        let mut changed = false;

        for done in self.search_manager.poll(constants::MAX_MESSAGES_PER_FRAME) {
            self.state.apply_search_result(&done.ticket, done.outcome);
            changed = true;
        }

        for done in self.chat_manager.poll(constants::MAX_MESSAGES_PER_FRAME) {
            self.state.chat.complete_send(&done.ticket, done.outcome);
            changed = true;
        }

        if let Some(status) = self.health_check.poll() {
            tracing::info!(status = %status, "Backend health check finished");
            self.state.backend_status = Some(status);
            changed = true;
        }

        changed
    }

    /// Start whatever the panels asked for last frame.
    fn dispatch_requests(&mut self) {
        if let Some(query) = self.state.pending_search.take() {
            match self.state.selection.begin_search(&query) {
                Ok(ticket) => {
                    self.state.status_message = format!("Searching for \"{}\"...", ticket.query);
                    self.search_manager.start(ticket);
                }
                Err(e) => tracing::debug!(error = %e, "Search request ignored"),
            }
        }

        if let Some(message) = self.state.pending_chat.take() {
            match self.state.chat.begin_send(&message) {
                Ok(ticket) => self.chat_manager.send(ticket),
                Err(e) => tracing::debug!(error = %e, "Chat request ignored"),
            }
        }
    }
}

impl eframe::App for VcScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Dispatch first so an in-memory search is collected in the same frame.
        self.dispatch_requests();
        let had_messages = self.poll_managers();

        // Keep repainting while anything is outstanding so completions show promptly.
        let in_flight = self.search_manager.has_pending()
            || self.state.chat.is_waiting()
            || self.state.backend_status.is_none();
        if had_messages {
            ctx.request_repaint();
        } else if in_flight {
            ctx.request_repaint_after(Duration::from_millis(constants::IN_FLIGHT_REPAINT_MS));
        }

        // Top bar
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.label(egui::RichText::new(constants::APP_NAME).strong().size(18.0));
                ui.separator();
                let chat_label = if self.state.chat_open {
                    "\u{1f4ac} Hide assistant"
                } else {
                    "\u{1f4ac} Ask the assistant"
                };
                if ui.button(chat_label).clicked() {
                    self.state.chat_open = !self.state.chat_open;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{24d8}").on_hover_text("About").clicked() {
                        self.state.show_about = true;
                    }
                    let theme_label = if self.state.dark_mode { "\u{2600}" } else { "\u{1f319}" };
                    if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ctx.set_visuals(if self.state.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.debug_mode {
                    ui.label(egui::RichText::new(" DEBUG ").small().strong());
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} warning(s)", self.state.warnings.len()))
                            .color(ui::theme::ERROR_TEXT),
                    )
                    .on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match self.state.backend_status.as_deref() {
                        Some(status) => {
                            let colour = if status.starts_with("Backend: healthy") {
                                ui::theme::STATUS_HEALTHY
                            } else {
                                ui::theme::STATUS_UNREACHABLE
                            };
                            ui.label(egui::RichText::new(status).color(colour));
                        }
                        None => {
                            ui.label(egui::RichText::new("Checking backend...").weak());
                        }
                    }
                    if self.search_manager.is_remote() {
                        ui.separator();
                        ui.label(egui::RichText::new("Remote search").weak());
                    }
                });
            });
        });

        // Chips and search box
        egui::TopBottomPanel::top("industries").show(ctx, |ui| {
            ui.add_space(8.0);
            ui::panels::industries::render(ui, &mut self.state);
            ui.add_space(8.0);
        });

        // Central panel (results)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });

        // Overlays
        ui::panels::detail::render(ctx, &mut self.state);
        ui::panels::chat::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }
}
