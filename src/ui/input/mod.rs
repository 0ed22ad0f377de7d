//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Year selector input (click and drag on the track)

pub mod slider_input_handler;
