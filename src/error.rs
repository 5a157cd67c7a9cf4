use std::fmt;

/// Errors that can happen inside rundown
#[derive(Debug)]
pub enum Error {
    // Clock string errors
    /// Failed to parse a clock string ("M:SS")
    ClockParseError {
        /// The input that failed to parse
        input: String,
        /// Additional context about why parsing failed
        reason: String,
    },

    // Schedule file errors
    /// Failed to read a schedule input file
    ScheduleReadError {
        /// Path to the unreadable file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// Failed to write a schedule output file
    ScheduleWriteError {
        /// Path to the file that could not be written
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// Failed to decode a schedule JSON document
    ScheduleJsonError {
        /// Path to the malformed document
        path: String,
        /// The underlying JSON error
        source: serde_json::Error,
    },
    /// A schedule item carries a length that failed validation
    ScheduleItemError {
        /// One-based position of the item in the rundown
        position: usize,
        /// Display label of the item
        name: String,
        /// The underlying parse error
        source: Box<Error>,
    },

    // Terminal interface errors
    /// Terminal setup, drawing or input handling failed
    TerminalError {
        /// The error message
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ClockParseError { input, reason } => {
                write!(f, "Failed to parse clock string '{input}': {reason}")
            }
            Error::ScheduleReadError { path, source } => {
                write!(f, "Failed to read schedule input '{path}': {source}")
            }
            Error::ScheduleWriteError { path, source } => {
                write!(f, "Failed to write schedule output '{path}': {source}")
            }
            Error::ScheduleJsonError { path, source } => {
                write!(f, "Failed to decode schedule JSON '{path}': {source}")
            }
            Error::ScheduleItemError {
                position,
                name,
                source,
            } => {
                write!(
                    f,
                    "Invalid length in rundown item {position} ('{name}'): {source}"
                )
            }
            Error::TerminalError { message } => {
                write!(f, "Terminal interface error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ScheduleReadError { source, .. } => Some(source),
            Error::ScheduleWriteError { source, .. } => Some(source),
            Error::ScheduleJsonError { source, .. } => Some(source),
            Error::ScheduleItemError { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_clock_parse_error_display() {
        let error = Error::ClockParseError {
            input: "1:xx".to_string(),
            reason: "seconds are not an integer".to_string(),
        };
        assert!(error.to_string().contains("Failed to parse clock string"));
        assert!(error.to_string().contains("1:xx"));
        assert!(error.to_string().contains("seconds are not an integer"));
    }

    #[test]
    fn test_schedule_read_error_display() {
        let error = Error::ScheduleReadError {
            path: "missing.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("Failed to read schedule input"));
        assert!(error.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_schedule_item_error_display() {
        let error = Error::ScheduleItemError {
            position: 3,
            name: "Weather".to_string(),
            source: Box::new(Error::ClockParseError {
                input: "soon".to_string(),
                reason: "expected exactly one ':' separator".to_string(),
            }),
        };
        assert!(error.to_string().contains("rundown item 3"));
        assert!(error.to_string().contains("Weather"));
        assert!(error.to_string().contains("soon"));
    }

    #[test]
    fn test_error_source() {
        let error = Error::ScheduleReadError {
            path: "schedule.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(StdError::source(&error).is_some());

        let error = Error::TerminalError {
            message: "draw failed".to_string(),
        };
        assert!(StdError::source(&error).is_none());
    }
}
