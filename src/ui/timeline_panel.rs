//! Timeline panel UI rendering.
//!
//! The bottom panel: a horizontally scrollable year axis with the claim
//! highlight strip, the draggable year selector, edge scroll affordances,
//! and the category legend. The panel's scroll container reconciles against
//! the shared offset every frame and publishes user scrolls back to it.

use claimline::{compute_bar_geometry, Claim, ThemeColors};
use eframe::egui;
use egui::ScrollArea;

use crate::app::AppState;
use crate::domain::scroll_operations::ARROW_SCROLL_STEP_PX;
use crate::domain::timeline_geometry;
use crate::presentation::color_mapping;
use crate::rendering::{claim_bar_renderer, timeline_overlays, year_axis_renderer};
use crate::ui::input::slider_input_handler;

/// Height of the scrollable timeline content.
const CONTENT_HEIGHT: f32 = 88.0;
/// Vertical placement of the highlight strip within the content.
const BAR_STRIP_TOP: f32 = 10.0;
const BAR_STRIP_HEIGHT: f32 = 6.0;
/// Vertical placement of the selector track within the content.
const TRACK_TOP: f32 = 40.0;
/// Vertical placement of the year axis within the content.
const AXIS_TOP: f32 = 56.0;

/// Result of timeline panel interactions handled by the application.
pub enum TimelinePanelInteraction {
    /// The user moved the year selector
    YearSelected(i32),
    /// A claim bar in the highlight strip was clicked
    ClaimSelected(usize),
    /// The user scrolled the panel; the new offset must be published
    ScrollChanged(f32),
}

/// Renders the complete timeline panel.
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<TimelinePanelInteraction> {
    if state.dataset.dataset().is_none() {
        ui.label("No dataset loaded — open a claims dataset or load sample data");
        return None;
    }

    let range = state.timeline.range();
    let selected_year = state.timeline.selected_year();
    let disabled = state.timeline.disabled();
    let selected_claim = state.selection.selected_claim();
    let content_width = timeline_geometry::content_width(range);

    let outer_rect = ui.available_rect_before_wrap();
    let mut interaction: Option<TimelinePanelInteraction> = None;

    // Programmatic scroll request queued by a sync or an affordance click
    let pending_scroll = state.timeline_scroll.take_pending_scroll();

    let claims: &[Claim] = state
        .dataset
        .active_country()
        .map(|c| c.claims.as_slice())
        .unwrap_or(&[]);

    let mut scroll_area = ScrollArea::horizontal().id_salt("timeline_scroll");
    if let Some(target) = pending_scroll {
        scroll_area = scroll_area.horizontal_scroll_offset(target);
    }

    let scroll_output = scroll_area.show(ui, |ui| {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(content_width, CONTENT_HEIGHT),
            egui::Sense::hover(),
        );

        let mut inner: Option<TimelinePanelInteraction> = None;

        // Highlight strip: one bar per claim of the active country
        let strip_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left(), rect.top() + BAR_STRIP_TOP),
            egui::vec2(rect.width(), BAR_STRIP_HEIGHT),
        );
        for (index, claim) in claims.iter().enumerate() {
            let geometry = compute_bar_geometry(&claim.span, range);
            let (left, right) = timeline_geometry::bar_x_range(geometry, strip_rect);
            if right <= left {
                continue;
            }
            let bar_rect = egui::Rect::from_min_max(
                egui::pos2(left, strip_rect.top()),
                egui::pos2(right, strip_rect.bottom()),
            );
            let emphasized = claim.span.from <= selected_year && selected_year <= claim.span.to;
            if claim_bar_renderer::render_claim_bar(
                ui,
                bar_rect,
                claim,
                selected_claim == Some(index),
                emphasized,
                true,
            ) {
                inner = Some(TimelinePanelInteraction::ClaimSelected(index));
            }
        }

        // Selector track: dim full-width line with an accent fill up to the thumb
        let track_y = rect.top() + TRACK_TOP;
        let thumb_x = timeline_geometry::year_to_x(selected_year, range, rect);
        ui.painter().line_segment(
            [egui::pos2(rect.left(), track_y), egui::pos2(rect.right(), track_y)],
            egui::Stroke::new(2.0, theme_colors.border),
        );
        ui.painter().line_segment(
            [egui::pos2(rect.left(), track_y), egui::pos2(thumb_x, track_y)],
            egui::Stroke::new(3.0, theme_colors.accent),
        );

        // Year axis beneath the track
        let axis_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left(), rect.top() + AXIS_TOP),
            egui::vec2(rect.width(), CONTENT_HEIGHT - AXIS_TOP),
        );
        year_axis_renderer::render_year_axis(ui, axis_rect, range, theme_colors);

        // Selector input on a band around the track
        let track_rect = egui::Rect::from_min_max(
            egui::pos2(rect.left(), track_y - 12.0),
            egui::pos2(rect.right(), track_y + 12.0),
        );
        let input = slider_input_handler::handle_slider_input(
            ui,
            track_rect,
            rect,
            range,
            selected_year,
            disabled,
        );
        if let Some(year) = input.new_year {
            inner = Some(TimelinePanelInteraction::YearSelected(year));
        }

        if !disabled {
            let thumb_center = egui::pos2(thumb_x, track_y);
            timeline_overlays::render_thumb(ui, thumb_center, theme_colors, input.active);
            if input.active {
                timeline_overlays::render_value_label(ui, thumb_center, selected_year, theme_colors);
            }
        }

        inner
    });

    if let Some(inner) = scroll_output.inner {
        interaction = Some(inner);
    }

    // Adopt this frame's scroll metrics and publish user-driven scrolls
    state
        .timeline_scroll
        .update_metrics(scroll_output.inner_rect.width(), content_width);
    if let Some(offset) = state
        .timeline_scroll
        .handle_user_scroll(scroll_output.state.offset.x)
    {
        if interaction.is_none() {
            interaction = Some(TimelinePanelInteraction::ScrollChanged(offset));
        }
    }

    render_scroll_affordances(ui, state, outer_rect);
    render_legend(ui, theme_colors);

    interaction
}

/// Renders the chevron buttons overlaid at the panel edges.
fn render_scroll_affordances(ui: &mut egui::Ui, state: &mut AppState, outer_rect: egui::Rect) {
    let arrow_y = outer_rect.top() + TRACK_TOP;

    if state.timeline_scroll.show_left_arrow() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(outer_rect.left() + 14.0, arrow_y),
            egui::vec2(22.0, 22.0),
        );
        if ui.put(rect, egui::Button::new("◀")).clicked() {
            state.timeline_scroll.scroll_by(-ARROW_SCROLL_STEP_PX);
        }
    }

    if state.timeline_scroll.show_right_arrow() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(outer_rect.right() - 14.0, arrow_y),
            egui::vec2(22.0, 22.0),
        );
        if ui.put(rect, egui::Button::new("▶")).clicked() {
            state.timeline_scroll.scroll_by(ARROW_SCROLL_STEP_PX);
        }
    }
}

/// Renders the claim-category legend beneath the timeline.
fn render_legend(ui: &mut egui::Ui, theme_colors: &ThemeColors) {
    ui.horizontal(|ui| {
        for (label, color) in color_mapping::legend_entries() {
            let (swatch_rect, _) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch_rect, 2.0, color);
            ui.label(egui::RichText::new(label).size(11.0).color(theme_colors.text_dim));
            ui.add_space(8.0);
        }
    });
}
