//! Configuration constants for rundown
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality and following Rust naming conventions.

// =============================================================================
// Schedule Import Constants
// =============================================================================

/// Default path of the CSV running-order export
pub const DEFAULT_CSV_PATH: &str = "schedule.csv";

/// Default path of the JSON schedule document
pub const DEFAULT_SCHEDULE_PATH: &str = "schedule.json";

/// Default field separator of the spreadsheet export
pub const DEFAULT_SEPARATOR: char = ',';

/// Default zero-based logical column holding the item name
pub const DEFAULT_NAME_COLUMN: usize = 1;

/// Fallback duration of the length-first import variant
pub const DEFAULT_DURATION_LENGTH_FIRST: &str = "0:00";

/// Fallback duration of the name-first import variant
pub const DEFAULT_DURATION_NAME_FIRST: &str = "0:20";

// =============================================================================
// Viewer Constants
// =============================================================================

/// Default refresh interval of the rundown position in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

/// Poll interval for terminal input events in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

// =============================================================================
// Session Identity Constants
// =============================================================================

/// Default prefix of the generated session identifier
pub const DEFAULT_SESSION_PREFIX: &str = "Rundown";

/// Default number of epoch-millisecond digits appended to the identifier
pub const DEFAULT_SESSION_DIGITS: usize = 4;

/// Default base URL embedded in the share link
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:8080";

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "RUNDOWN_LOG";

// =============================================================================
// Logging Messages
// =============================================================================

/// Log message for the import command
pub const LOG_MSG_IMPORT_SCHEDULE: &str = "Importing schedule";

/// Log message for the view command
pub const LOG_MSG_START_VIEWER: &str = "Starting rundown viewer";
