// VCScout - ui/panels/industries.rs
//
// Industry chips and the free-text search box. Both only raise a search
// request on AppState; the app loop starts it.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the chip row and search box.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Find VCs by industry");
    ui.add_space(6.0);

    let active = state.selection.query.clone();

    ui.horizontal_wrapped(|ui| {
        for &industry in constants::POPULAR_INDUSTRIES {
            let colour = theme::industry_colour(industry);
            let selected = active
                .as_deref()
                .is_some_and(|q| q.eq_ignore_ascii_case(industry));

            let text = egui::RichText::new(industry).color(if selected {
                egui::Color32::WHITE
            } else {
                colour
            });
            let chip = egui::Button::new(text)
                .fill(if selected {
                    colour
                } else {
                    egui::Color32::TRANSPARENT
                })
                .stroke(egui::Stroke::new(1.0, colour))
                .corner_radius(12.0);

            if ui.add(chip).clicked() {
                state.search_input = industry.to_string();
                state.request_search(industry);
            }
        }
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text("Search any industry or keyword...")
                .desired_width(320.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let can_submit = !state.search_input.trim().is_empty();

        let clicked = ui
            .add_enabled(can_submit, egui::Button::new("Search"))
            .clicked();

        if can_submit && (clicked || submitted) {
            let query = state.search_input.clone();
            state.request_search(&query);
        }
    });
}
