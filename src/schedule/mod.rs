//! Schedule handling for rundown
//!
//! This module provides the schedule functionality organized by concern:
//! - The schedule data model and JSON loading
//! - The CSV running-order importer
//! - Position tracking of a schedule against a live clock

pub mod import;
pub mod item;
pub mod tracker;

// Re-export main types and functions
pub use import::{ImportVariant, convert_csv, import_schedule, render_json};
pub use item::{Schedule, ScheduleItem};
pub use tracker::{RunClock, RunPosition, RundownTracker, TimedItem};
