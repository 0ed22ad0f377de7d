//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from business logic:
//! - Fixed claim-category colors shared by the bars and the legend
//! - Theme color lookup

pub mod color_mapping;
