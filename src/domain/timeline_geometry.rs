//! Timeline geometry for coordinate transformation on the painted canvas.
//!
//! This module provides pure functions for:
//! - Converting between years and screen X coordinates
//! - Sizing the scrollable timeline content
//!
//! These functions are stateless and can be tested independently.

use claimline::{BarGeometry, TimeRange};

/// Horizontal pixels allocated per year of timeline content.
pub const YEAR_PIXEL_WIDTH: f32 = 30.0;

/// Minimum width of the scrollable timeline content in pixels.
pub const MIN_CONTENT_WIDTH: f32 = 600.0;

/// Returns the pixel width of the scrollable content for a year range.
pub fn content_width(range: TimeRange) -> f32 {
    (range.span_years() as f32 * YEAR_PIXEL_WIDTH).max(MIN_CONTENT_WIDTH)
}

/// Converts a year to an X coordinate within the canvas rect.
///
/// # Arguments
/// * `year` - The year to convert
/// * `range` - The year extent mapped onto the canvas
/// * `canvas_rect` - The canvas rectangle for positioning
pub fn year_to_x(year: i32, range: TimeRange, canvas_rect: egui::Rect) -> f32 {
    if range.end_year == range.start_year {
        return canvas_rect.left();
    }
    let normalized = (year - range.start_year) as f32 / range.span_years() as f32;
    canvas_rect.left() + normalized * canvas_rect.width()
}

/// Converts an X coordinate to the nearest year, clamped into the range.
///
/// The result steps in whole years, which is what makes the selector snap.
pub fn x_to_year(x: f32, range: TimeRange, canvas_rect: egui::Rect) -> i32 {
    if canvas_rect.width() <= 0.0 {
        return range.start_year;
    }
    let normalized = ((x - canvas_rect.left()) / canvas_rect.width()).clamp(0.0, 1.0);
    let year = range.start_year + (normalized * range.span_years() as f32).round() as i32;
    range.clamp_year(year)
}

/// Converts percentage bar geometry into pixel X coordinates on the canvas.
pub fn bar_x_range(geometry: BarGeometry, canvas_rect: egui::Rect) -> (f32, f32) {
    let left = canvas_rect.left() + geometry.left_percent / 100.0 * canvas_rect.width();
    let width = geometry.width_percent / 100.0 * canvas_rect.width();
    (left, left + width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimline::{compute_bar_geometry, HighlightSpan};

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1200.0, 80.0))
    }

    #[test]
    fn test_year_to_x_endpoints() {
        let range = TimeRange::new(1900, 2020);
        assert_eq!(year_to_x(1900, range, canvas()), 0.0);
        assert_eq!(year_to_x(2020, range, canvas()), 1200.0);
    }

    #[test]
    fn test_x_to_year_round_trip() {
        let range = TimeRange::new(1900, 2020);
        for year in (1900..=2020).step_by(13) {
            let x = year_to_x(year, range, canvas());
            assert_eq!(x_to_year(x, range, canvas()), year);
        }
    }

    #[test]
    fn test_x_to_year_clamps_outside_canvas() {
        let range = TimeRange::new(1900, 2020);
        assert_eq!(x_to_year(-50.0, range, canvas()), 1900);
        assert_eq!(x_to_year(5000.0, range, canvas()), 2020);
    }

    #[test]
    fn test_bar_x_range_matches_year_positions() {
        let range = TimeRange::new(1900, 2020);
        let span = HighlightSpan::ongoing(1960, range, None, false);
        let geometry = compute_bar_geometry(&span, range);
        let (left, right) = bar_x_range(geometry, canvas());

        assert!((left - year_to_x(1960, range, canvas())).abs() < 0.5);
        assert!((right - 1200.0).abs() < 0.5);
    }

    #[test]
    fn test_content_width_minimum() {
        assert_eq!(content_width(TimeRange::new(2000, 2010)), MIN_CONTENT_WIDTH);
        assert_eq!(content_width(TimeRange::new(1900, 2020)), 120.0 * YEAR_PIXEL_WIDTH);
    }
}
