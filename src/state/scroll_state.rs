//! Scroll synchronization state for a horizontally scrollable panel.
//!
//! Each synced panel owns one of these. The application state holds the
//! shared offset (single source of truth); a panel reconciles against it
//! once per frame and publishes user-driven scrolls back through the
//! coordinator. Reconciliation goes through a 1 px deadband so the two
//! copies cannot oscillate.

use crate::domain::scroll_operations;

/// State related to one panel's horizontal scroll container.
///
/// Responsibilities:
/// - Mirroring the container's pixel offset
/// - Queueing programmatic scroll requests (external syncs, arrow buttons)
/// - Tracking scroll-affordance visibility
#[derive(Debug, Clone, Default)]
pub struct ScrollSyncState {
    /// Last known offset of the scroll container
    offset: f32,
    /// Offset to apply to the container on the next frame, if any
    pending_target: Option<f32>,
    /// Width of the visible viewport, updated every frame
    viewport_width: f32,
    /// Width of the scrollable content, updated every frame
    content_width: f32,
    /// Whether the left scroll affordance is visible
    show_left_arrow: bool,
    /// Whether the right scroll affordance is visible
    show_right_arrow: bool,
}

impl ScrollSyncState {
    /// Creates a new scroll state at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to the origin and drops any pending scroll request.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ===== Queries =====

    /// Returns the last known container offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns whether the left scroll affordance is visible.
    pub fn show_left_arrow(&self) -> bool {
        self.show_left_arrow
    }

    /// Returns whether the right scroll affordance is visible.
    pub fn show_right_arrow(&self) -> bool {
        self.show_right_arrow
    }

    // ===== Reconciliation =====

    /// Reconciles against the shared offset.
    ///
    /// When the container has drifted more than the deadband from the shared
    /// value, queues a programmatic scroll to it. Within the deadband this is
    /// a no-op, which is what prevents two synced panels from ping-ponging.
    /// Never publishes outward; only user scrolls do that.
    pub fn sync_external(&mut self, external: f32) {
        if scroll_operations::needs_sync(self.offset, external) {
            self.pending_target = Some(external);
            self.offset = external;
            self.recompute_affordances();
        }
    }

    /// Adopts the container's actual offset after a frame.
    ///
    /// Returns `Some(offset)` when the offset changed (a user-driven scroll,
    /// or the container clamping a programmatic target), in which case the
    /// caller must publish the new value to the shared owner.
    pub fn handle_user_scroll(&mut self, actual: f32) -> Option<f32> {
        if (actual - self.offset).abs() > f32::EPSILON {
            self.offset = actual;
            self.recompute_affordances();
            Some(actual)
        } else {
            None
        }
    }

    /// Queues a relative scroll (affordance buttons).
    pub fn scroll_by(&mut self, delta: f32) {
        self.pending_target = Some((self.offset + delta).max(0.0));
    }

    /// Takes the queued programmatic scroll target, if any.
    pub fn take_pending_scroll(&mut self) -> Option<f32> {
        self.pending_target.take()
    }

    /// Records the container's viewport and content widths for this frame
    /// and refreshes affordance visibility from them.
    ///
    /// Called every frame before input handling, so the affordances are
    /// correct from the first frame on, prior to any user interaction.
    pub fn update_metrics(&mut self, viewport_width: f32, content_width: f32) {
        self.viewport_width = viewport_width;
        self.content_width = content_width;
        self.recompute_affordances();
    }

    fn recompute_affordances(&mut self) {
        self.show_left_arrow = scroll_operations::show_left_arrow(self.offset);
        self.show_right_arrow =
            scroll_operations::show_right_arrow(self.offset, self.viewport_width, self.content_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synced_state() -> ScrollSyncState {
        let mut state = ScrollSyncState::new();
        state.update_metrics(600.0, 2000.0);
        state
    }

    #[test]
    fn test_sync_external_is_idempotent() {
        let mut state = synced_state();

        state.sync_external(250.0);
        assert_eq!(state.take_pending_scroll(), Some(250.0));
        // Container lands on the target; no outbound publish
        assert_eq!(state.handle_user_scroll(250.0), None);

        // Second sync with the same value: no request, no publish
        state.sync_external(250.0);
        assert_eq!(state.take_pending_scroll(), None);
        assert_eq!(state.handle_user_scroll(250.0), None);
        assert!((state.offset() - 250.0).abs() <= 1.0);
    }

    #[test]
    fn test_sync_within_deadband_is_noop() {
        let mut state = synced_state();
        state.sync_external(250.0);
        state.take_pending_scroll();

        state.sync_external(250.8);
        assert_eq!(state.take_pending_scroll(), None);
        assert_eq!(state.offset(), 250.0);
    }

    #[test]
    fn test_user_scroll_publishes_outward() {
        let mut state = synced_state();

        assert_eq!(state.handle_user_scroll(120.0), Some(120.0));
        // Same offset next frame: nothing more to publish
        assert_eq!(state.handle_user_scroll(120.0), None);
    }

    #[test]
    fn test_affordance_boundaries() {
        let mut state = ScrollSyncState::new();
        state.update_metrics(600.0, 2000.0);

        assert!(!state.show_left_arrow());
        assert!(state.show_right_arrow());

        state.handle_user_scroll(500.0);
        assert!(state.show_left_arrow());
        assert!(state.show_right_arrow());

        // offset + viewport == content - 10: right arrow turns off exactly here
        state.handle_user_scroll(1390.0);
        assert!(!state.show_right_arrow());

        state.handle_user_scroll(0.0);
        assert!(!state.show_left_arrow());
    }

    #[test]
    fn test_scroll_by_clamps_at_origin() {
        let mut state = synced_state();
        state.scroll_by(-200.0);
        assert_eq!(state.take_pending_scroll(), Some(0.0));

        state.handle_user_scroll(300.0);
        state.scroll_by(-200.0);
        assert_eq!(state.take_pending_scroll(), Some(100.0));
    }
}
