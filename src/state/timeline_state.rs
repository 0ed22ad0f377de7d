//! Year range and selected-year state for the timeline.

use claimline::TimeRange;

/// The year the selector starts on when a dataset does not say otherwise.
pub const DEFAULT_INITIAL_YEAR: i32 = 1945;

const DEFAULT_RANGE: TimeRange = TimeRange { start_year: 1945, end_year: 2020 };

/// State related to the timeline's year extent and selected year.
///
/// Responsibilities:
/// - Tracking the year range of the loaded dataset
/// - Holding the selected year, bounded to the range with step 1
/// - Distinguishing user-driven changes (published) from initialization
///   (silent)
#[derive(Debug, Clone)]
pub struct TimelineState {
    range: TimeRange,
    selected_year: i32,
    /// Suppresses the drag indicator when true
    disabled: bool,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineState {
    /// Creates a new timeline state with the default range and initial year.
    pub fn new() -> Self {
        Self {
            range: DEFAULT_RANGE,
            selected_year: DEFAULT_INITIAL_YEAR,
            disabled: false,
        }
    }

    /// Adopts a dataset's year range, clamping the selected year into it.
    ///
    /// This is initialization, not a user change: nothing is published.
    pub fn initialize(&mut self, range: TimeRange) {
        self.range = range;
        self.selected_year = range.clamp_year(self.selected_year);
    }

    // ===== Queries =====

    /// Returns the current year range.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Returns the selected year.
    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// Returns whether the drag indicator is suppressed.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    // ===== Mutations =====

    /// Applies a user-driven selection. The year is clamped into the range.
    ///
    /// Returns true when the selection actually changed; the caller
    /// publishes the new year outward only in that case.
    pub fn set_selected_year(&mut self, year: i32) -> bool {
        let clamped = self.range.clamp_year(year);
        if clamped != self.selected_year {
            self.selected_year = clamped;
            true
        } else {
            false
        }
    }

    /// Enables or disables the drag indicator.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_silent_and_clamps() {
        let mut state = TimelineState::new();
        assert_eq!(state.selected_year(), DEFAULT_INITIAL_YEAR);

        state.initialize(TimeRange::new(1960, 2000));
        assert_eq!(state.selected_year(), 1960);
        assert_eq!(state.range(), TimeRange::new(1960, 2000));
    }

    #[test]
    fn test_unchanged_selection_is_not_published() {
        let mut state = TimelineState::new();
        assert!(!state.set_selected_year(DEFAULT_INITIAL_YEAR));
        assert!(state.set_selected_year(1970));
        assert!(!state.set_selected_year(1970));
    }

    #[test]
    fn test_selection_clamped_to_range() {
        let mut state = TimelineState::new();
        state.initialize(TimeRange::new(1950, 2000));

        assert!(state.set_selected_year(2500));
        assert_eq!(state.selected_year(), 2000);
        // A second out-of-range set resolves to the same clamped year
        assert!(!state.set_selected_year(2600));
    }
}
