// VCScout - ui/panels/about.rs
//
// About dialog, opened from the top bar. Shows where searches and chat
// replies come from for this session.

use crate::app::state::AppState;
use crate::ui::text;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("\u{1f4bc}  {}", constants::APP_NAME))
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Find investors across ten popular industries");
                ui.label("and ask the assistant which firms to approach.");
            });

            ui.add_space(10.0);

            egui::Grid::new("about_session")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Backend").weak());
                    ui.monospace(state.backend_url.as_deref().unwrap_or("not configured"));
                    ui.end_row();

                    ui.label(egui::RichText::new("Status").weak());
                    ui.label(state.backend_status.as_deref().unwrap_or("Checking..."));
                    ui.end_row();

                    ui.label(egui::RichText::new("Search").weak());
                    ui.label(text::search_source(state.remote_search, state.corpus_size));
                    ui.end_row();

                    ui.label(egui::RichText::new("Industries").weak());
                    ui.label(constants::POPULAR_INDUSTRIES.len().to_string());
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(text::licence_line(
                        constants::APP_LICENSE,
                        constants::COPYRIGHT_YEAR,
                        constants::COPYRIGHT_HOLDER,
                    ))
                    .small()
                    .weak(),
                );
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
