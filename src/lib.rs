//! # rundown
//!
//! A broadcast rundown schedule converter and live timing viewer.
//!
//! The crate has two halves:
//!
//! - **Importer**: a one-shot batch transform that converts a spreadsheet
//!   CSV export of a program running order into a JSON schedule
//!   (`rundown import`).
//! - **Viewer**: a terminal UI that tracks that schedule against a live
//!   run clock, computing elapsed/remaining time per item
//!   (`rundown view`).
//!
//! The timing core is a set of pure conversions between `"M:SS"` clock
//! strings and millisecond timestamps in [`utils::time`], with the
//! historically divergent difference rounding kept selectable via
//! [`DiffStrategy`].
//!
//! ## Example
//!
//! ```no_run
//! use rundown::{Config, ImportVariant, convert_csv, render_json};
//!
//! let config = Config::new().with_import_variant(ImportVariant::NameFirst);
//! let schedule = convert_csv("Length,Name\n1,0,Opening\n0,0,\n", &config);
//! let json = render_json(schedule.items(), config.import_variant).unwrap();
//! assert!(json.contains("Opening"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod schedule;
pub mod session;
pub mod tui;
pub mod utils;

// Re-export main types and functions for convenient library usage
pub use config::Config;
pub use error::{Error, Result};
pub use schedule::{
    ImportVariant, RunClock, RunPosition, RundownTracker, Schedule, ScheduleItem, TimedItem,
    convert_csv, import_schedule, render_json,
};
pub use session::{
    Environment, Session, SessionOptions, SystemEnvironment, create_session, session_id,
    share_url,
};
pub use tui::start_rundown_tui;
pub use utils::time::{
    DiffStrategy, Timestamp, format_timestamp, formatted_time_difference, parse_clock_string,
};
