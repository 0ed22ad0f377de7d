//! Country search UI rendering.
//!
//! A text field with a suggestion popup underneath. Options come from the
//! fetched country list, falling back to the loaded dataset's countries.
//! Committing a selection reports the country (code + name) upward.

use claimline::Country;
use eframe::egui;

use crate::app::AppState;

/// Result of user interaction with the search control.
pub enum SearchInteraction {
    /// A country was chosen from the suggestion list
    CountrySelected(Country),
}

/// Renders the search field and its suggestion popup.
pub fn render_search_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<SearchInteraction> {
    let mut interaction = None;

    let response = egui::TextEdit::singleline(state.search.query_mut())
        .hint_text("Enter a country")
        .desired_width(240.0)
        .show(ui)
        .response;

    if response.changed() || response.gained_focus() {
        state.search.set_suggestions_open(true);
    }
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.search.set_suggestions_open(false);
    }

    if state.search.suggestions_open() {
        let suggestions = state.search.suggestions();
        let popup_pos = response.rect.left_bottom() + egui::vec2(0.0, 4.0);

        let area_response = egui::Area::new(ui.id().with("country_suggestions"))
            .order(egui::Order::Foreground)
            .fixed_pos(popup_pos)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(response.rect.width());
                    if suggestions.is_empty() {
                        ui.weak("No matching countries");
                    }
                    for country in suggestions {
                        let label = format!("{} ({})", country.name, country.code);
                        if ui.selectable_label(false, label).clicked() {
                            interaction = Some(SearchInteraction::CountrySelected(country));
                        }
                    }
                });
            });

        // Close on selection, or on a press outside both the field and the
        // popup. Focus loss alone must not close it: a click on a suggestion
        // starts by unfocusing the field and only completes on release.
        let popup_rect = area_response.response.rect;
        let pressed_outside = ui.input(|i| {
            i.pointer.any_pressed()
                && i.pointer
                    .interact_pos()
                    .map(|pos| !popup_rect.contains(pos) && !response.rect.contains(pos))
                    .unwrap_or(false)
        });
        if interaction.is_some() || pressed_outside {
            state.search.set_suggestions_open(false);
        }
    }

    interaction
}
