// VCScout - ui/panels/results.rs
//
// Central panel: result cards for the current query, or the loading,
// empty, failed, and welcome placeholders.

use crate::app::state::{AppState, SearchPhase};
use crate::core::model::FirmProfile;
use crate::ui::{text, theme};
use crate::util::constants;

/// What the user did with a card this frame. Applied after the card loop so
/// the results are not borrowed while state changes.
enum CardAction {
    ToggleDescription(String),
    OpenProfile(usize),
}

/// Render the results area.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(query) = state.selection.query.clone() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Pick an industry above to see matching investors.").weak(),
            );
        });
        return;
    };

    match state.selection.phase.clone() {
        SearchPhase::Idle => {}
        SearchPhase::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.label(format!("Searching for {query}..."));
            });
        }
        SearchPhase::Failed { message } => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new(text::search_failed(&query)).color(theme::ERROR_TEXT));
                ui.label(egui::RichText::new(message).small().weak());
                ui.add_space(8.0);
                if ui.button("Retry").clicked() {
                    state.request_search(&query);
                }
            });
        }
        SearchPhase::Loaded if state.selection.results.is_empty() => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(text::no_results(&query));
            });
        }
        SearchPhase::Loaded => render_cards(ui, state, &query),
    }
}

fn render_cards(ui: &mut egui::Ui, state: &mut AppState, query: &str) {
    ui.heading(text::results_heading(query));
    ui.label(
        egui::RichText::new(text::results_count(state.selection.results.len(), query)).weak(),
    );
    ui.add_space(theme::CARD_SPACING);

    let mut actions = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(theme::CARD_SPACING, theme::CARD_SPACING);
                for (idx, profile) in state.selection.results.iter().enumerate() {
                    let expanded = state.is_card_expanded(&profile.id);
                    render_card(ui, idx, profile, expanded, &mut actions);
                }
            });
        });

    for action in actions {
        match action {
            CardAction::ToggleDescription(id) => state.toggle_card(&id),
            CardAction::OpenProfile(idx) => {
                if let Some(profile) = state.selection.results.get(idx).cloned() {
                    state.selection.open_profile(profile);
                }
            }
        }
    }
}

fn render_card(
    ui: &mut egui::Ui,
    idx: usize,
    profile: &FirmProfile,
    expanded: bool,
    actions: &mut Vec<CardAction>,
) {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(theme::CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    logo_badge(ui, profile);
                    ui.vertical(|ui| {
                        let name = ui.add(
                            egui::Label::new(egui::RichText::new(&profile.firm_name).strong().size(16.0))
                                .sense(egui::Sense::click()),
                        );
                        if name.on_hover_text("View profile").clicked() {
                            actions.push(CardAction::OpenProfile(idx));
                        }
                        ui.label(format!(
                            "{}, {}",
                            profile.contact_person.name, profile.contact_person.designation
                        ));
                    });
                });

                ui.horizontal(|ui| {
                    industry_tag(ui, &profile.industry_focus);
                    if !profile.location.is_empty() {
                        ui.label(egui::RichText::new(format!("\u{1f4cd} {}", profile.location)).small());
                    }
                });

                if !profile.description.is_empty() {
                    let (shown, truncated) = if expanded {
                        (profile.description.clone(), false)
                    } else {
                        text::truncate_description(
                            &profile.description,
                            constants::CARD_DESCRIPTION_PREVIEW_CHARS,
                        )
                    };
                    ui.label(shown);
                    if truncated || expanded {
                        let label = if expanded { "Read less" } else { "Read more" };
                        if ui.link(label).clicked() {
                            actions.push(CardAction::ToggleDescription(profile.id.clone()));
                        }
                    }
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("\u{2709} Contact").clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(text::mailto(&profile.email)));
                    }
                    if let Some(url) = profile.website_url.as_deref() {
                        if ui.button("\u{1f310} Website").clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                        }
                    }
                    if ui.button("Details").clicked() {
                        actions.push(CardAction::OpenProfile(idx));
                    }
                });
            });
        });
}

/// Initials on a coloured square, standing in for the firm logo.
pub fn logo_badge(ui: &mut egui::Ui, profile: &FirmProfile) {
    let size = egui::vec2(theme::LOGO_BADGE_SIZE, theme::LOGO_BADGE_SIZE);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let colour = theme::industry_colour(&profile.industry_focus);
    ui.painter().rect_filled(rect, 6.0, colour);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text::initials(&profile.firm_name),
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );
}

/// Small coloured pill naming an industry.
pub fn industry_tag(ui: &mut egui::Ui, industry: &str) {
    let colour = theme::industry_colour(industry);
    ui.label(
        egui::RichText::new(format!(" {industry} "))
            .small()
            .color(egui::Color32::WHITE)
            .background_color(colour),
    );
}
