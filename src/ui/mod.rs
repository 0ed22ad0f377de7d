//! UI panel rendering subsystem.
//!
//! This module contains all UI panel rendering logic for the claimline
//! viewer:
//! - Header panel (dataset controls, country search, theme selector)
//! - Claims panel (per-movement rows on the shared year scale)
//! - Timeline panel (year axis, highlight strip, year selector, legend)
//! - Status bar (dataset metadata display)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (year selector interactions)

pub mod claims_panel;
pub mod header;
pub mod input;
pub mod panel_manager;
pub mod search_panel;
pub mod status_bar;
pub mod timeline_panel;
