//! Timeline overlay rendering for the year selector.
//!
//! Handles the selected-year marker line, the selector thumb, and the value
//! label shown while the selector is being dragged.

use claimline::{adjust_brightness, ThemeColors};
use eframe::egui;

/// Radius of the year selector thumb.
pub const THUMB_RADIUS: f32 = 7.0;

/// Renders the selector thumb at `center`.
pub fn render_thumb(ui: &egui::Ui, center: egui::Pos2, theme_colors: &ThemeColors, active: bool) {
    let painter = ui.painter();
    let radius = if active { THUMB_RADIUS + 1.5 } else { THUMB_RADIUS };

    painter.circle_filled(center, radius, theme_colors.accent);
    painter.circle_stroke(
        center,
        radius,
        egui::Stroke::new(1.5, adjust_brightness(theme_colors.accent, 1.3)),
    );
}

/// Renders the value label box above the thumb while interacting.
pub fn render_value_label(
    ui: &egui::Ui,
    thumb_center: egui::Pos2,
    year: i32,
    theme_colors: &ThemeColors,
) {
    let painter = ui.painter();
    let label_text = format!("{year}");
    let font_id = egui::FontId::proportional(11.0);

    let galley = painter.layout_no_wrap(label_text.clone(), font_id.clone(), egui::Color32::WHITE);
    let text_size = galley.size();
    let padding = egui::vec2(5.0, 2.0);

    let box_center = egui::pos2(thumb_center.x, thumb_center.y - THUMB_RADIUS - text_size.y);
    let bg_rect = egui::Rect::from_center_size(
        box_center,
        egui::vec2(text_size.x + padding.x * 2.0, text_size.y + padding.y * 2.0),
    );

    painter.rect_filled(bg_rect, 4.0, theme_colors.accent);
    painter.text(
        box_center,
        egui::Align2::CENTER_CENTER,
        label_text,
        font_id,
        egui::Color32::WHITE,
    );
}

/// Renders the vertical selected-year line across a panel's content rect.
///
/// Used by the claims panel so the selection reads across both views.
pub fn render_year_line(ui: &egui::Ui, content_rect: egui::Rect, x: f32, theme_colors: &ThemeColors) {
    ui.painter().line_segment(
        [
            egui::pos2(x, content_rect.top()),
            egui::pos2(x, content_rect.bottom()),
        ],
        egui::Stroke::new(1.0, theme_colors.accent.gamma_multiply(0.6)),
    );
}
