//! Header panel UI rendering.
//!
//! Handles the top bar with dataset controls, the country search control,
//! and the theme selector.

use claimline::Country;
use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;
use crate::ui::search_panel::{self, SearchInteraction};

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User picked a dataset file to open
    OpenDatasetRequested(PathBuf),
    /// User asked for the built-in sample dataset
    LoadSampleRequested,
    /// User chose a country in the search control
    CountrySelected(Country),
}

/// Renders the application header with dataset controls and search.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📂 Open Dataset").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Claims Dataset", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenDatasetRequested(path));
            }
        }

        if ui.button("🎲 Sample Data").clicked() {
            interaction = Some(HeaderInteraction::LoadSampleRequested);
        }

        ui.separator();

        if let Some(SearchInteraction::CountrySelected(country)) =
            search_panel::render_search_panel(ui, state)
        {
            interaction = Some(HeaderInteraction::CountrySelected(country));
        }

        if let Some(country) = state.dataset.active_country() {
            ui.label(
                egui::RichText::new(format!(
                    "{} — {} movement{}",
                    country.name,
                    country.claims.len(),
                    if country.claims.len() == 1 { "" } else { "s" }
                ))
                .weak(),
            );
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(egui::Color32::RED, err);
    }

    interaction
}
