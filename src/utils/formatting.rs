//! Formatting utilities for rundown
//!
//! This module provides functions for formatting display strings,
//! particularly for schedule rows and timing labels in the user interface.

/// Formats a schedule row for display
///
/// # Arguments
/// * `position` - One-based position of the item in the rundown
/// * `name` - The display label of the item
/// * `length` - The planned duration as a clock string
///
/// # Returns
/// Returns a formatted string describing the schedule row
pub fn format_item_row(position: usize, name: &str, length: &str) -> String {
    format!("{position:>2}. {name} [{length}]")
}

/// Formats an elapsed/total pair for a progress label
///
/// # Arguments
/// * `elapsed` - The elapsed time as a clock string
/// * `total` - The total time as a clock string
///
/// # Returns
/// Returns a formatted "elapsed / total" label
pub fn format_clock_span(elapsed: &str, total: &str) -> String {
    format!("{elapsed} / {total}")
}
