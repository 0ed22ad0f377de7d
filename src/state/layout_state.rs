//! UI layout state management.

use serde::{Deserialize, Serialize};

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Managing the claims/timeline panel split
/// - Persisting layout preferences across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Height of the timeline panel at the bottom of the window, in pixels
    timeline_height: f32,
    /// Width of the movement-name gutter in the claims panel, in pixels
    gutter_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            timeline_height: 160.0,
            gutter_width: 180.0,
        }
    }

    /// Creates a layout state from persisted values, rejecting nonsense.
    pub fn from_persisted(timeline_height: f32, gutter_width: f32) -> Self {
        let defaults = Self::new();
        Self {
            timeline_height: if timeline_height.is_finite() && timeline_height >= 80.0 {
                timeline_height
            } else {
                defaults.timeline_height
            },
            gutter_width: if gutter_width.is_finite() && gutter_width >= 60.0 {
                gutter_width
            } else {
                defaults.gutter_width
            },
        }
    }

    /// Returns the timeline panel height in pixels.
    pub fn timeline_height(&self) -> f32 {
        self.timeline_height
    }

    /// Returns the claims-panel gutter width in pixels.
    pub fn gutter_width(&self) -> f32 {
        self.gutter_width
    }

    /// Records the timeline panel height after a user resize.
    pub fn set_timeline_height(&mut self, height: f32) {
        self.timeline_height = height.max(80.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_values_validated() {
        let layout = LayoutState::from_persisted(f32::NAN, 0.0);
        assert_eq!(layout.timeline_height(), 160.0);
        assert_eq!(layout.gutter_width(), 180.0);

        let layout = LayoutState::from_persisted(240.0, 120.0);
        assert_eq!(layout.timeline_height(), 240.0);
        assert_eq!(layout.gutter_width(), 120.0);
    }
}
