//! Rendering subsystem for drawing the claims visualization.
//!
//! This module contains all painting logic:
//! - Year axis rendering (tick marks and labels)
//! - Claim bar rendering (colored spans, violence hatching, selection)
//! - Timeline overlays (selected-year line and value label)

pub mod claim_bar_renderer;
pub mod timeline_overlays;
pub mod year_axis_renderer;
