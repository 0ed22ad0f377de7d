//! Claims panel UI rendering.
//!
//! The central panel: one row per movement of the active country, with the
//! claim period drawn as a bar on the shared year scale. The panel's scroll
//! container stays in sync with the timeline below it through the shared
//! offset.

use claimline::{compute_bar_geometry, ThemeColors};
use eframe::egui;
use egui::ScrollArea;

use crate::app::AppState;
use crate::domain::timeline_geometry;
use crate::rendering::{claim_bar_renderer, timeline_overlays};
use crate::utils::format_claim_summary;

/// Height of one movement row.
const ROW_HEIGHT: f32 = 24.0;
/// Height of the bar within a row.
const BAR_HEIGHT: f32 = 12.0;

/// Result of claims panel interactions handled by the application.
pub enum ClaimsPanelInteraction {
    /// A claim row bar was clicked
    ClaimSelected(usize),
    /// The user scrolled the panel; the new offset must be published
    ScrollChanged(f32),
}

/// Renders the claims panel for the active country.
pub fn render_claims_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<ClaimsPanelInteraction> {
    if state.dataset.dataset().is_none() {
        ui.label("No dataset loaded");
        return None;
    }

    let Some(country) = state.dataset.active_country() else {
        ui.label("Search for a country to see its movements and claims");
        return None;
    };

    if country.claims.is_empty() {
        ui.label(format!("No claims recorded for {}", country.name));
        return None;
    }

    let range = state.timeline.range();
    let selected_year = state.timeline.selected_year();
    let selected_claim = state.selection.selected_claim();
    let gutter_width = state.layout.gutter_width();
    let content_width = timeline_geometry::content_width(range);

    let summaries: Vec<String> = country.claims.iter().map(format_claim_summary).collect();
    let claims = country.claims.clone();

    let pending_scroll = state.claims_scroll.take_pending_scroll();

    let mut interaction: Option<ClaimsPanelInteraction> = None;

    ui.horizontal_top(|ui| {
        // Fixed gutter with movement names, outside the scroll container
        ui.vertical(|ui| {
            ui.set_width(gutter_width);
            for (index, summary) in summaries.iter().enumerate() {
                let text = if selected_claim == Some(index) {
                    egui::RichText::new(summary).strong()
                } else {
                    egui::RichText::new(summary)
                };
                ui.add_sized(
                    [gutter_width, ROW_HEIGHT],
                    egui::Label::new(text).truncate(),
                );
            }
        });

        // Scrollable rows of claim bars, synced with the timeline
        let mut scroll_area = ScrollArea::horizontal()
            .id_salt("claims_scroll")
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden);
        if let Some(target) = pending_scroll {
            scroll_area = scroll_area.horizontal_scroll_offset(target);
        }

        let scroll_output = scroll_area.show(ui, |ui| {
            ui.set_min_width(content_width);

            let mut inner: Option<ClaimsPanelInteraction> = None;
            let rows_top = ui.cursor().min;

            for (index, claim) in claims.iter().enumerate() {
                let (row_rect, _) = ui.allocate_exact_size(
                    egui::vec2(content_width, ROW_HEIGHT),
                    egui::Sense::hover(),
                );

                let geometry = compute_bar_geometry(&claim.span, range);
                let (left, right) = timeline_geometry::bar_x_range(geometry, row_rect);
                if right <= left {
                    continue;
                }

                let bar_rect = egui::Rect::from_min_max(
                    egui::pos2(left, row_rect.center().y - BAR_HEIGHT / 2.0),
                    egui::pos2(right, row_rect.center().y + BAR_HEIGHT / 2.0),
                );

                let emphasized =
                    claim.span.from <= selected_year && selected_year <= claim.span.to;
                if claim_bar_renderer::render_claim_bar(
                    ui,
                    bar_rect,
                    claim,
                    selected_claim == Some(index),
                    emphasized,
                    true,
                ) {
                    inner = Some(ClaimsPanelInteraction::ClaimSelected(index));
                }
            }

            // Selected-year line across all rows, on the same scale
            let rows_rect = egui::Rect::from_min_max(
                rows_top,
                egui::pos2(rows_top.x + content_width, ui.cursor().min.y),
            );
            let year_x = timeline_geometry::year_to_x(selected_year, range, rows_rect);
            timeline_overlays::render_year_line(ui, rows_rect, year_x, theme_colors);

            inner
        });

        if let Some(inner) = scroll_output.inner {
            interaction = Some(inner);
        }

        state
            .claims_scroll
            .update_metrics(scroll_output.inner_rect.width(), content_width);
        if let Some(offset) = state
            .claims_scroll
            .handle_user_scroll(scroll_output.state.offset.x)
        {
            if interaction.is_none() {
                interaction = Some(ClaimsPanelInteraction::ScrollChanged(offset));
            }
        }
    });

    interaction
}
