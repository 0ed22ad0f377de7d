//! Scroll reconciliation and affordance-visibility rules.
//!
//! The scroll offset is shared between the timeline and the claims panel;
//! each panel reconciles its own container against the shared value. The
//! deadband keeps the two copies from ping-ponging when they disagree by
//! less than a pixel.

/// Minimum difference before a panel is programmatically re-scrolled.
pub const SCROLL_DEADBAND_PX: f32 = 1.0;

/// Slack at the right edge before the right affordance disappears.
pub const RIGHT_EDGE_MARGIN_PX: f32 = 10.0;

/// Pixels moved per click of a scroll affordance button.
pub const ARROW_SCROLL_STEP_PX: f32 = 200.0;

/// True when the left scroll affordance should be visible.
pub fn show_left_arrow(offset: f32) -> bool {
    offset > 0.0
}

/// True when the right scroll affordance should be visible.
pub fn show_right_arrow(offset: f32, viewport_width: f32, content_width: f32) -> bool {
    offset + viewport_width < content_width - RIGHT_EDGE_MARGIN_PX
}

/// True when `internal` has drifted far enough from `external` that the
/// container must be re-scrolled.
pub fn needs_sync(internal: f32, external: f32) -> bool {
    (internal - external).abs() > SCROLL_DEADBAND_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_arrow_hidden_exactly_at_origin() {
        assert!(!show_left_arrow(0.0));
        assert!(show_left_arrow(0.5));
        assert!(show_left_arrow(300.0));
    }

    #[test]
    fn test_right_arrow_boundary() {
        // Hidden exactly when offset + viewport >= content - margin
        assert!(!show_right_arrow(390.0, 600.0, 1000.0));
        assert!(!show_right_arrow(400.0, 600.0, 1000.0));
        assert!(show_right_arrow(389.0, 600.0, 1000.0));
        assert!(show_right_arrow(0.0, 600.0, 1000.0));
    }

    #[test]
    fn test_deadband() {
        assert!(!needs_sync(100.0, 100.0));
        assert!(!needs_sync(100.0, 100.9));
        assert!(!needs_sync(100.9, 100.0));
        assert!(needs_sync(100.0, 101.1));
        assert!(needs_sync(0.0, 250.0));
    }
}
