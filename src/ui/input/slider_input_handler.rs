//! Year selector input handling.
//!
//! Maps pointer clicks and drags on the selector track to whole years,
//! clamped into the timeline range (step = 1 year). Out-of-range values
//! cannot be produced: the clamp is the selector's min/max constraint.

use claimline::TimeRange;
use eframe::egui;

use crate::domain::timeline_geometry;

/// Result of one frame of selector input.
pub struct SliderInput {
    /// The year the user moved the selector to, when it changed
    pub new_year: Option<i32>,
    /// True while the pointer is down on the track
    pub active: bool,
}

/// Handles click/drag input on the selector track.
///
/// # Arguments
/// * `ui` - The egui UI context
/// * `track_rect` - The interactive band around the selector track
/// * `canvas_rect` - The full-width rect years are mapped onto
/// * `range` - The timeline year range
/// * `current_year` - The currently selected year
/// * `disabled` - Suppresses all interaction when true
pub fn handle_slider_input(
    ui: &mut egui::Ui,
    track_rect: egui::Rect,
    canvas_rect: egui::Rect,
    range: TimeRange,
    current_year: i32,
    disabled: bool,
) -> SliderInput {
    if disabled {
        return SliderInput { new_year: None, active: false };
    }

    let response = ui.interact(
        track_rect,
        ui.id().with("year_selector_track"),
        egui::Sense::click_and_drag(),
    );

    let active = response.is_pointer_button_down_on() || response.dragged();

    let mut new_year = None;
    if response.clicked() || response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let year = timeline_geometry::x_to_year(pos.x, range, canvas_rect);
            if year != current_year {
                new_year = Some(year);
            }
        }
    }

    SliderInput { new_year, active }
}
