//! Timeline geometry for claim highlight bars.
//!
//! This module provides pure functions and types for:
//! - Mapping claim year spans onto a percentage coordinate space
//! - Generating year tick marks for the axis
//!
//! These functions are stateless and can be tested independently.

use crate::model::ClaimCategory;

/// The year extent covered by a timeline.
///
/// Invariant: `start_year < end_year`. The dataset parser enforces this;
/// geometry functions additionally guard the degenerate case rather than
/// dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_year: i32,
    pub end_year: i32,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self { start_year, end_year }
    }

    /// Returns the number of years spanned by this range.
    pub fn span_years(&self) -> i32 {
        self.end_year - self.start_year
    }

    /// Returns true if `year` lies within this range (inclusive).
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    /// Clamps `year` into this range.
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.clamp(self.start_year, self.end_year)
    }
}

/// A claim period to be rendered as a colored bar on the timeline.
///
/// `from`/`to` need not lie inside the owning range; bars that extend past
/// the range edges are clipped visually by the scroll viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSpan {
    /// First year of the claim period
    pub from: i32,
    /// Last year of the claim period (the range end for ongoing claims)
    pub to: i32,
    /// Claim category, if the source label matched a known category
    pub category: Option<ClaimCategory>,
    /// Whether the claim period saw violent escalation
    pub violence: bool,
    /// True for ongoing claims with no recorded end year
    pub open_ended: bool,
}

impl HighlightSpan {
    /// Creates a closed span covering `from..=to` inclusive.
    pub fn closed(from: i32, to: i32, category: Option<ClaimCategory>, violence: bool) -> Self {
        Self { from, to, category, violence, open_ended: false }
    }

    /// Creates an ongoing span running from `from` to the end of `range`.
    pub fn ongoing(from: i32, range: TimeRange, category: Option<ClaimCategory>, violence: bool) -> Self {
        Self { from, to: range.end_year, category, violence, open_ended: true }
    }
}

/// Horizontal placement of a highlight bar, in percent of the content width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left_percent: f32,
    pub width_percent: f32,
}

impl BarGeometry {
    /// Zero-size geometry, used for degenerate ranges.
    pub const ZERO: Self = Self { left_percent: 0.0, width_percent: 0.0 };
}

/// Computes the percentage placement of a highlight bar within a range.
///
/// Closed spans are inclusive of their end year, so a one-year claim still
/// gets a visible width. Ongoing spans run exactly to the range end with no
/// inclusive adjustment.
///
/// # Arguments
/// * `span` - The claim period to place
/// * `range` - The year extent of the timeline
pub fn compute_bar_geometry(span: &HighlightSpan, range: TimeRange) -> BarGeometry {
    let total_years = range.span_years() as f32;
    if total_years <= 0.0 {
        return BarGeometry::ZERO;
    }

    let left_percent = (span.from - range.start_year) as f32 / total_years * 100.0;

    let adjustment = if span.open_ended { 0 } else { 1 };
    let width_percent = (span.to - span.from + adjustment) as f32 / total_years * 100.0;

    BarGeometry { left_percent, width_percent }
}

/// A single tick mark on the year axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMark {
    pub year: i32,
    /// True when the mark carries a text label (every 5th year)
    pub labeled: bool,
}

/// Generates one tick mark per year across the range, labeling multiples of 5.
pub fn year_marks(range: TimeRange) -> Vec<YearMark> {
    (range.start_year..=range.end_year)
        .map(|year| YearMark { year, labeled: year % 5 == 0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_1900_2020() -> TimeRange {
        TimeRange::new(1900, 2020)
    }

    #[test]
    fn test_closed_span_geometry() {
        let span = HighlightSpan::closed(1960, 1975, Some(ClaimCategory::Independence), false);
        let geometry = compute_bar_geometry(&span, range_1900_2020());

        assert!((geometry.left_percent - 50.0).abs() < 1e-4);
        assert!((geometry.width_percent - 16.0 / 120.0 * 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_open_ended_span_geometry() {
        let range = range_1900_2020();
        let span = HighlightSpan::ongoing(2000, range, Some(ClaimCategory::Autonomy), false);
        let geometry = compute_bar_geometry(&span, range);

        // No inclusive-end adjustment for ongoing claims
        assert!((geometry.width_percent - 20.0 / 120.0 * 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_in_range_spans_stay_in_bounds() {
        let range = range_1900_2020();
        for from in (1900..=2020).step_by(7) {
            for to in (from..=2020).step_by(11) {
                let span = HighlightSpan::closed(from, to, None, false);
                let geometry = compute_bar_geometry(&span, range);

                assert!(geometry.left_percent >= 0.0);
                assert!(geometry.left_percent <= 100.0);
                assert!(geometry.left_percent + geometry.width_percent <= 100.0 + 1.0);
            }
        }
    }

    #[test]
    fn test_one_year_span_has_width() {
        let span = HighlightSpan::closed(1950, 1950, None, false);
        let geometry = compute_bar_geometry(&span, range_1900_2020());

        assert!(geometry.width_percent > 0.0);
    }

    #[test]
    fn test_degenerate_range_yields_zero_geometry() {
        let range = TimeRange::new(2000, 2000);
        let span = HighlightSpan::closed(2000, 2000, None, false);

        assert_eq!(compute_bar_geometry(&span, range), BarGeometry::ZERO);
    }

    #[test]
    fn test_year_marks_label_every_fifth_year() {
        let marks = year_marks(TimeRange::new(1998, 2007));

        assert_eq!(marks.len(), 10);
        let labeled: Vec<i32> = marks.iter().filter(|m| m.labeled).map(|m| m.year).collect();
        assert_eq!(labeled, vec![2000, 2005]);
    }

    #[test]
    fn test_clamp_year() {
        let range = range_1900_2020();
        assert_eq!(range.clamp_year(1880), 1900);
        assert_eq!(range.clamp_year(2050), 2020);
        assert_eq!(range.clamp_year(1960), 1960);
    }
}
