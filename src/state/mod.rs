//! State management modules for the claimline viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Dataset state (loaded claims data, source path, active country)
//! - Timeline state (year range, selected year)
//! - Scroll state (per-panel offsets, deadbanded sync, affordances)
//! - Search state (query, country options, committed selection)
//! - Selection state (selected claim)
//! - Theme state (theme manager, current theme)
//! - Layout state (panel sizing)

mod dataset_state;
mod layout_state;
mod scroll_state;
mod search_state;
mod selection_state;
mod theme_state;
mod timeline_state;

pub use dataset_state::DatasetState;
pub use layout_state::LayoutState;
pub use scroll_state::ScrollSyncState;
pub use search_state::{SearchState, MAX_SUGGESTIONS};
pub use selection_state::SelectionState;
pub use theme_state::ThemeState;
pub use timeline_state::{TimelineState, DEFAULT_INITIAL_YEAR};
