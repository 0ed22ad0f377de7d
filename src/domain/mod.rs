//! Domain logic modules for the claimline viewer.
//!
//! This module contains core business logic:
//! - Timeline geometry (year-to-pixel conversions, content sizing)
//! - Scroll operations (affordance visibility, deadband reconciliation)

pub mod scroll_operations;
pub mod timeline_geometry;
