//! Clock-string conversion utilities for rundown
//!
//! This module provides the conversions between the two duration
//! representations used throughout the application:
//! - Clock strings of the form "M:SS" (unbounded minutes, zero-padded seconds)
//! - Millisecond timestamps (signed, so differences can be represented)

use crate::error::{Error, Result};

/// A duration expressed as a whole number of milliseconds.
///
/// Non-negative when it represents a planned or elapsed duration; negative
/// values occur transiently for signed differences before formatting.
pub type Timestamp = i64;

/// One displayed second, the epsilon added by [`DiffStrategy::FixedEpsilon`]
const DIFF_EPSILON_MS: Timestamp = 1000;

/// Rounding strategies for [`formatted_time_difference`]
///
/// Both strategies appear in the historical record of the schedule display
/// and diverge by up to one second on boundary inputs, so the choice is an
/// explicit configuration rather than a hardcoded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStrategy {
    /// Floor the end time and ceil the start time to whole seconds before
    /// subtracting. Biases a countdown toward the value a viewer perceives
    /// as "remaining time has just ticked over".
    AsymmetricRounding,
    /// Add exactly one second to the raw difference before formatting.
    /// Compensates for an inclusive-end convention where an item's last
    /// second still counts as airing.
    FixedEpsilon,
}

impl DiffStrategy {
    /// Returns the configuration name of the strategy
    pub fn name(&self) -> &'static str {
        match self {
            DiffStrategy::AsymmetricRounding => "asymmetric-rounding",
            DiffStrategy::FixedEpsilon => "fixed-epsilon",
        }
    }

    /// Returns all available strategies
    pub fn all() -> Vec<DiffStrategy> {
        vec![DiffStrategy::AsymmetricRounding, DiffStrategy::FixedEpsilon]
    }
}

impl Default for DiffStrategy {
    fn default() -> Self {
        DiffStrategy::AsymmetricRounding
    }
}

impl std::fmt::Display for DiffStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DiffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asymmetric-rounding" => Ok(DiffStrategy::AsymmetricRounding),
            "fixed-epsilon" => Ok(DiffStrategy::FixedEpsilon),
            other => Err(format!(
                "unknown diff strategy '{other}' (expected 'asymmetric-rounding' or 'fixed-epsilon')"
            )),
        }
    }
}

/// Parses a clock string ("M:SS") into a millisecond timestamp
///
/// The input must split on ':' into exactly two integer-parsable tokens.
/// Anything else is rejected instead of letting garbage propagate into the
/// display arithmetic.
///
/// # Arguments
/// * `time` - Clock string to convert, e.g. "2:30"
///
/// # Returns
/// Returns the duration in milliseconds, or [`Error::ClockParseError`] for
/// malformed input
pub fn parse_clock_string(time: &str) -> Result<Timestamp> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 2 {
        return Err(Error::ClockParseError {
            input: time.to_string(),
            reason: "expected exactly one ':' separator".to_string(),
        });
    }

    let minutes: i64 = parts[0].parse().map_err(|_| Error::ClockParseError {
        input: time.to_string(),
        reason: "minutes are not an integer".to_string(),
    })?;
    let seconds: i64 = parts[1].parse().map_err(|_| Error::ClockParseError {
        input: time.to_string(),
        reason: "seconds are not an integer".to_string(),
    })?;

    Ok((minutes * 60 + seconds) * 1000)
}

/// Formats a millisecond timestamp as a clock string ("M:SS")
///
/// Sub-second precision is truncated, not rounded, and minutes grow without
/// an hour rollover ("60:00" stays "60:00"). Negative input keeps its sign
/// in both fields: the minutes floor toward negative infinity while the
/// seconds keep the truncating remainder, so -1500 renders as "-1:-2".
///
/// # Arguments
/// * `time` - Duration in milliseconds
///
/// # Returns
/// Returns the clock string representation
pub fn format_timestamp(time: Timestamp) -> String {
    let total_seconds = time.div_euclid(1000);
    let minutes = total_seconds.div_euclid(60);
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// Formats the difference `time2 - time1` as a clock string
///
/// The two timestamps are reduced to whole seconds according to the chosen
/// [`DiffStrategy`] before the difference is formatted. The result can be
/// negative once `time1` has passed `time2`.
///
/// # Arguments
/// * `time1` - Start of the span, in milliseconds (usually the elapsed time)
/// * `time2` - End of the span, in milliseconds (usually the planned length)
/// * `strategy` - Rounding strategy to apply
///
/// # Returns
/// Returns the formatted difference
pub fn formatted_time_difference(
    time1: Timestamp,
    time2: Timestamp,
    strategy: DiffStrategy,
) -> String {
    match strategy {
        DiffStrategy::AsymmetricRounding => {
            let seconds = time2.div_euclid(1000) - ceil_seconds(time1);
            format_timestamp(seconds * 1000)
        }
        DiffStrategy::FixedEpsilon => format_timestamp(time2 - time1 + DIFF_EPSILON_MS),
    }
}

/// Divides a millisecond count into whole seconds, rounding up
fn ceil_seconds(time: Timestamp) -> i64 {
    (time + 999).div_euclid(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_string() {
        assert_eq!(parse_clock_string("2:30").unwrap(), 150_000);
        assert_eq!(parse_clock_string("0:00").unwrap(), 0);
        assert_eq!(parse_clock_string("1:05").unwrap(), 65_000);
        assert_eq!(parse_clock_string("60:00").unwrap(), 3_600_000);
        assert_eq!(parse_clock_string("123:45").unwrap(), 7_425_000);
    }

    #[test]
    fn test_parse_clock_string_loose_forms() {
        // Unpadded and overflowing seconds are accepted; only the canonical
        // form is guaranteed to round-trip.
        assert_eq!(parse_clock_string("1:5").unwrap(), 65_000);
        assert_eq!(parse_clock_string("1:75").unwrap(), 135_000);
    }

    #[test]
    fn test_parse_clock_string_invalid() {
        for input in ["invalid", "", "1:2:3", "1:", ":30", "1:xx", "1.5:00", "1: 05"] {
            let err = parse_clock_string(input).unwrap_err();
            match err {
                Error::ClockParseError { input: reported, .. } => assert_eq!(reported, input),
                other => panic!("expected ClockParseError, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(65_000), "1:05");
        assert_eq!(format_timestamp(3_600_000), "60:00");
        assert_eq!(format_timestamp(5_000), "0:05");
        assert_eq!(format_timestamp(60_000), "1:00");
    }

    #[test]
    fn test_format_timestamp_truncates_subseconds() {
        assert_eq!(format_timestamp(1), "0:00");
        assert_eq!(format_timestamp(999), "0:00");
        assert_eq!(format_timestamp(59_999), "0:59");
        assert_eq!(format_timestamp(61_500), "1:01");
    }

    #[test]
    fn test_format_timestamp_negative() {
        assert_eq!(format_timestamp(-1), "-1:-1");
        assert_eq!(format_timestamp(-1_000), "-1:-1");
        assert_eq!(format_timestamp(-1_500), "-1:-2");
        assert_eq!(format_timestamp(-60_000), "-1:00");
        assert_eq!(format_timestamp(-90_000), "-2:-30");
    }

    #[test]
    fn test_clock_string_round_trip() {
        for minutes in 0..=180_i64 {
            for seconds in 0..60_i64 {
                let timestamp = minutes * 60_000 + seconds * 1_000;
                let formatted = format_timestamp(timestamp);
                assert_eq!(
                    parse_clock_string(&formatted).unwrap(),
                    timestamp,
                    "round trip failed for {formatted}"
                );
            }
        }
    }

    #[test]
    fn test_formatted_time_difference_asymmetric() {
        let strategy = DiffStrategy::AsymmetricRounding;
        // Boundary: equal timestamps
        assert_eq!(formatted_time_difference(0, 0, strategy), "0:00");
        assert_eq!(formatted_time_difference(1_000, 1_000, strategy), "0:00");
        // Boundary: sub-second gap
        assert_eq!(formatted_time_difference(0, 999, strategy), "0:00");
        // Equal but not on a whole second: the asymmetric rounding dips below zero
        assert_eq!(formatted_time_difference(1_500, 1_500, strategy), "-1:-1");
        // Both sides mid-second cancel out
        assert_eq!(formatted_time_difference(500, 1_500, strategy), "0:00");
        assert_eq!(formatted_time_difference(1_000, 2_500, strategy), "0:01");
        assert_eq!(formatted_time_difference(0, 65_000, strategy), "1:05");
        assert_eq!(formatted_time_difference(30_000, 90_000, strategy), "1:00");
    }

    #[test]
    fn test_formatted_time_difference_fixed_epsilon() {
        let strategy = DiffStrategy::FixedEpsilon;
        // Boundary: equal timestamps still show one second of air time
        assert_eq!(formatted_time_difference(0, 0, strategy), "0:01");
        assert_eq!(formatted_time_difference(1_500, 1_500, strategy), "0:01");
        // Boundary: sub-second gap
        assert_eq!(formatted_time_difference(0, 999, strategy), "0:01");
        assert_eq!(formatted_time_difference(500, 1_500, strategy), "0:02");
        assert_eq!(formatted_time_difference(0, 65_000, strategy), "1:06");
    }

    #[test]
    fn test_diff_strategy_names() {
        for strategy in DiffStrategy::all() {
            let parsed: DiffStrategy = strategy.name().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
        assert!("countdown".parse::<DiffStrategy>().is_err());
        assert_eq!(DiffStrategy::default(), DiffStrategy::AsymmetricRounding);
    }
}
