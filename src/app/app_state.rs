//! Centralized application state for the claimline viewer.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's
//! state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{
    DatasetState, LayoutState, ScrollSyncState, SearchState, SelectionState, ThemeState,
    TimelineState,
};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded dataset and active country
    pub dataset: DatasetState,

    /// Year range and selected year
    pub timeline: TimelineState,

    /// Country search control state
    pub search: SearchState,

    /// Selected claim state
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    /// Timeline panel scroll container state
    pub timeline_scroll: ScrollSyncState,

    /// Claims panel scroll container state
    pub claims_scroll: ScrollSyncState,

    // ===== Top-Level State =====
    /// Shared horizontal scroll offset — the single source of truth both
    /// panels reconcile against
    pub shared_scroll_left: f32,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            dataset: DatasetState::new(),
            timeline: TimelineState::new(),
            search: SearchState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            timeline_scroll: ScrollSyncState::new(),
            claims_scroll: ScrollSyncState::new(),
            shared_scroll_left: 0.0,
            error_message: None,
        }
    }

    /// Creates a new AppState with theme and layout loaded from storage.
    pub fn with_theme_and_layout(theme_name: String, layout: LayoutState) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            layout,
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets dataset-dependent state when loading a new dataset.
    pub fn reset_dataset_state(&mut self) {
        self.dataset.clear();
        self.selection.clear();
        self.timeline_scroll.reset();
        self.claims_scroll.reset();
        self.shared_scroll_left = 0.0;
        self.error_message = None;
    }
}
