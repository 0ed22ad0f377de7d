//! Utility modules for the claimline viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_year_span, format_claim_summary};
