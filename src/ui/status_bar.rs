//! Status bar UI rendering.
//!
//! Handles the bottom status bar displaying dataset metadata.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(dataset) = state.dataset.dataset() {
            let source = state
                .dataset
                .file_path()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Sample dataset".to_string());
            let range = dataset.range();

            ui.label(RichText::new(format!(
                "{} | Countries: {} | Claims: {} | Years: {}–{} | Selected: {}",
                source,
                dataset.countries().len(),
                dataset.claim_count(),
                range.start_year,
                range.end_year,
                state.timeline.selected_year(),
            ))
            .strong());

            if let Some(country) = state.dataset.active_country() {
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!("{}: {} claims", country.name, country.claims.len()))
                        .strong(),
                );
            }
        } else {
            ui.label(RichText::new("No dataset loaded").strong());
        }
    });
}
