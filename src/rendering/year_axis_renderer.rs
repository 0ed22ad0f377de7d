//! Year axis rendering logic.
//!
//! Paints one tick mark per year with a text label on every 5th year,
//! matching the marks of the year selector.

use claimline::{year_marks, ThemeColors, TimeRange};
use eframe::egui;

use crate::domain::timeline_geometry;

/// Renders the year axis into `axis_rect`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `axis_rect` - The rectangular area to draw the axis in
/// * `range` - The year extent mapped onto the rect
/// * `theme_colors` - Color palette for the current theme
pub fn render_year_axis(
    ui: &egui::Ui,
    axis_rect: egui::Rect,
    range: TimeRange,
    theme_colors: &ThemeColors,
) {
    if range.span_years() <= 0 {
        return;
    }

    let painter = ui.painter();

    for mark in year_marks(range) {
        let x = timeline_geometry::year_to_x(mark.year, range, axis_rect);

        if mark.labeled {
            painter.line_segment(
                [
                    egui::pos2(x, axis_rect.top()),
                    egui::pos2(x, axis_rect.top() + 8.0),
                ],
                egui::Stroke::new(1.5, theme_colors.axis),
            );
            painter.text(
                egui::pos2(x, axis_rect.top() + 11.0),
                egui::Align2::CENTER_TOP,
                format!("{}", mark.year),
                egui::FontId::proportional(10.0),
                theme_colors.axis,
            );
        } else {
            painter.line_segment(
                [
                    egui::pos2(x, axis_rect.top()),
                    egui::pos2(x, axis_rect.top() + 4.0),
                ],
                egui::Stroke::new(1.0, theme_colors.axis.gamma_multiply(0.5)),
            );
        }
    }
}
