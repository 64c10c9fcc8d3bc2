// VCScout - ui/panels/detail.rs
//
// Profile detail overlay for the firm chosen from the results.

use crate::app::state::AppState;
use crate::ui::panels::results::{industry_tag, logo_badge};
use crate::ui::{text, theme};

/// Render the detail overlay (if a profile is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(profile) = state.selection.active_profile.as_ref() else {
        return;
    };

    let mut open = true;
    egui::Window::new(&profile.firm_name)
        .id(egui::Id::new("profile_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(theme::DETAIL_WINDOW_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                logo_badge(ui, profile);
                ui.vertical(|ui| {
                    ui.heading(&profile.firm_name);
                    industry_tag(ui, &profile.industry_focus);
                });
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui| {
                    ui.strong("Key contact");
                    ui.label(&profile.contact_person.name);
                    ui.label(egui::RichText::new(&profile.contact_person.designation).weak());
                    if let Some(bio) = profile.contact_person.bio.as_deref() {
                        ui.label(bio);
                    }

                    if !profile.location.is_empty() {
                        ui.add_space(8.0);
                        ui.strong("Location");
                        ui.label(&profile.location);
                    }

                    if !profile.description.is_empty() {
                        ui.add_space(8.0);
                        ui.strong("About");
                        ui.label(&profile.description);
                    }

                    if !profile.sectors.is_empty() {
                        ui.add_space(8.0);
                        ui.strong("Investment sectors");
                        ui.horizontal_wrapped(|ui| {
                            for sector in &profile.sectors {
                                industry_tag(ui, sector);
                            }
                        });
                    }

                    ui.add_space(8.0);
                    ui.strong("Contact information");
                    egui::Grid::new("detail_contact_grid")
                        .num_columns(2)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Email:");
                            ui.label(&profile.email);
                            ui.end_row();

                            if let Some(url) = profile.website_url.as_deref() {
                                ui.label("Website:");
                                ui.label(url);
                                ui.end_row();
                            }

                            if let Some(url) = profile.linkedin_url.as_deref() {
                                ui.label("LinkedIn:");
                                ui.label(url);
                                ui.end_row();
                            }
                        });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("\u{2709} Send Email").clicked() {
                    ctx.open_url(egui::OpenUrl::new_tab(text::mailto(&profile.email)));
                }
                if let Some(url) = profile.website_url.as_deref() {
                    if ui.button("\u{1f310} Visit Site").clicked() {
                        ctx.open_url(egui::OpenUrl::new_tab(url));
                    }
                }
                if let Some(url) = profile.linkedin_url.as_deref() {
                    if ui.button("View Profile").clicked() {
                        ctx.open_url(egui::OpenUrl::new_tab(url));
                    }
                }
            });
        });

    if !open {
        state.selection.close_profile();
    }
}
