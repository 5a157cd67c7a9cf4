//! Utility functions and helpers for rundown
//!
//! This module provides the utility functions shared across the application:
//! - Clock-string parsing and conversion
//! - Display string formatting

pub mod formatting;
pub mod time;

// Re-export commonly used functions
pub use formatting::{format_clock_span, format_item_row};
pub use time::{
    DiffStrategy, Timestamp, format_timestamp, formatted_time_difference, parse_clock_string,
};
