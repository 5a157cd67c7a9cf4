//! Rundown position tracking for rundown
//!
//! This module resolves a schedule against an elapsed run time: which item
//! is currently on air, how far into it the clock is, and the formatted
//! elapsed/remaining strings the viewer displays. The tracker itself is
//! pure; the wall clock lives in [`RunClock`], an accumulator over
//! [`std::time::Instant`] that supports start/pause/reset/seek.

use crate::error::{Error, Result};
use crate::schedule::item::Schedule;
use crate::utils::time::{
    DiffStrategy, Timestamp, format_timestamp, formatted_time_difference, parse_clock_string,
};
use log::debug;
use std::time::Instant;

/// A schedule item validated for timing
///
/// The planned length is parsed once at load time, so a malformed length
/// fails loudly before the show starts instead of mid-rundown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedItem {
    /// Display label of the item
    pub name: String,
    /// Planned duration as the original clock string
    pub length_label: String,
    /// Planned duration in milliseconds
    pub length: Timestamp,
    /// Cumulative start offset of the item within the rundown
    pub start: Timestamp,
}

/// The resolved display state at a given elapsed run time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPosition {
    /// The rundown is inside an item
    Inside {
        /// Index of the current item
        index: usize,
        /// Elapsed time within the current item, in milliseconds
        item_elapsed: Timestamp,
    },
    /// The rundown end has passed
    Overrun {
        /// How far past the planned end the clock is, in milliseconds
        past_end: Timestamp,
    },
}

impl RunPosition {
    /// Returns the current item index, if inside the rundown
    pub fn index(&self) -> Option<usize> {
        match self {
            RunPosition::Inside { index, .. } => Some(*index),
            RunPosition::Overrun { .. } => None,
        }
    }
}

/// Pure schedule-against-clock arithmetic
#[derive(Debug, Clone)]
pub struct RundownTracker {
    /// Validated items with cumulative start offsets
    items: Vec<TimedItem>,
    /// Total planned length of the rundown in milliseconds
    total_length: Timestamp,
    /// Rounding strategy for the remaining-time display
    strategy: DiffStrategy,
}

impl RundownTracker {
    /// Builds a tracker from a schedule, validating every item length
    ///
    /// A planned duration must parse and be non-negative; a negative
    /// length would pull later start offsets backwards and make two items
    /// claim the same instant.
    ///
    /// # Arguments
    /// * `schedule` - The schedule to track
    /// * `strategy` - Rounding strategy for the remaining-time display
    ///
    /// # Returns
    /// Returns the tracker, or [`Error::ScheduleItemError`] naming the
    /// first item whose length fails validation
    pub fn new(schedule: &Schedule, strategy: DiffStrategy) -> Result<Self> {
        let mut items = Vec::with_capacity(schedule.len());
        let mut start: Timestamp = 0;

        for (index, item) in schedule.items().iter().enumerate() {
            let length =
                parse_clock_string(&item.length).map_err(|e| Error::ScheduleItemError {
                    position: index + 1,
                    name: item.name.clone(),
                    source: Box::new(e),
                })?;

            if length < 0 {
                return Err(Error::ScheduleItemError {
                    position: index + 1,
                    name: item.name.clone(),
                    source: Box::new(Error::ClockParseError {
                        input: item.length.clone(),
                        reason: "planned duration is negative".to_string(),
                    }),
                });
            }

            items.push(TimedItem {
                name: item.name.clone(),
                length_label: item.length.clone(),
                length,
                start,
            });
            start += length;
        }

        debug!(
            "Tracking {} items, total length {}",
            items.len(),
            format_timestamp(start)
        );

        Ok(Self {
            items,
            total_length: start,
            strategy,
        })
    }

    /// Gets the validated items in broadcast order
    pub fn items(&self) -> &[TimedItem] {
        &self.items
    }

    /// Gets the item at the given index
    pub fn get(&self, index: usize) -> Option<&TimedItem> {
        self.items.get(index)
    }

    /// Returns the number of items in the rundown
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the rundown is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total planned length of the rundown in milliseconds
    pub fn total_length(&self) -> Timestamp {
        self.total_length
    }

    /// Returns the rounding strategy used for remaining-time displays
    pub fn strategy(&self) -> DiffStrategy {
        self.strategy
    }

    /// Resolves the rundown position at the given elapsed run time
    ///
    /// Item `i` is current while `start_i <= elapsed < start_i + length_i`,
    /// so a zero-length item never becomes current. Past the total length
    /// the position is an overrun.
    pub fn position_at(&self, elapsed: Timestamp) -> RunPosition {
        let elapsed = elapsed.max(0);

        if elapsed >= self.total_length {
            return RunPosition::Overrun {
                past_end: elapsed - self.total_length,
            };
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.length > 0 && elapsed >= item.start && elapsed < item.start + item.length {
                return RunPosition::Inside {
                    index,
                    item_elapsed: elapsed - item.start,
                };
            }
        }

        // Unreachable for elapsed < total_length, since every such instant
        // falls inside exactly one item with a positive length.
        RunPosition::Overrun {
            past_end: elapsed - self.total_length,
        }
    }

    /// Formats the elapsed time within an item
    pub fn elapsed_label(&self, item_elapsed: Timestamp) -> String {
        format_timestamp(item_elapsed)
    }

    /// Formats the remaining time of the item at the given index
    ///
    /// Applies the tracker's [`DiffStrategy`], so this is the countdown a
    /// viewer sees ticking against the item's planned length.
    pub fn remaining_label(&self, index: usize, item_elapsed: Timestamp) -> String {
        match self.items.get(index) {
            Some(item) => formatted_time_difference(item_elapsed, item.length, self.strategy),
            None => format_timestamp(0),
        }
    }
}

/// A start/pause/reset/seek run clock
///
/// Accumulates elapsed milliseconds across pauses so the tracker can stay
/// a pure function of the elapsed time.
#[derive(Debug, Clone)]
pub struct RunClock {
    /// Milliseconds accumulated across completed running spans
    accumulated_ms: Timestamp,
    /// Start of the current running span, if the clock is running
    started_at: Option<Instant>,
}

impl Default for RunClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RunClock {
    /// Creates a stopped clock at zero
    pub fn new() -> Self {
        Self {
            accumulated_ms: 0,
            started_at: None,
        }
    }

    /// Starts or resumes the clock
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Pauses the clock, keeping the accumulated elapsed time
    pub fn pause(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated_ms += started_at.elapsed().as_millis() as Timestamp;
        }
    }

    /// Toggles between running and paused, returning whether the clock
    /// runs afterwards
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Stops the clock and resets it to zero
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
        self.started_at = None;
    }

    /// Jumps the clock to the given elapsed time, keeping its run state
    pub fn seek(&mut self, elapsed: Timestamp) {
        self.accumulated_ms = elapsed.max(0);
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Returns the elapsed run time in milliseconds
    pub fn elapsed(&self) -> Timestamp {
        let running_ms = self
            .started_at
            .map(|started_at| started_at.elapsed().as_millis() as Timestamp)
            .unwrap_or(0);
        self.accumulated_ms + running_ms
    }

    /// Checks if the clock is running
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::item::ScheduleItem;

    fn sample_schedule() -> Schedule {
        Schedule::from_items(vec![
            ScheduleItem::new("Opening", "1:30"),
            ScheduleItem::new("Bumper", "0:00"),
            ScheduleItem::new("Weather", "2:00"),
        ])
    }

    #[test]
    fn test_tracker_offsets_and_total() {
        let tracker = RundownTracker::new(&sample_schedule(), DiffStrategy::default()).unwrap();

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.get(0).unwrap().start, 0);
        assert_eq!(tracker.get(1).unwrap().start, 90_000);
        assert_eq!(tracker.get(2).unwrap().start, 90_000);
        assert_eq!(tracker.total_length(), 210_000);
        assert_eq!(tracker.get(2).unwrap().length_label, "2:00");
    }

    #[test]
    fn test_position_at_boundaries() {
        let tracker = RundownTracker::new(&sample_schedule(), DiffStrategy::default()).unwrap();

        assert_eq!(
            tracker.position_at(0),
            RunPosition::Inside {
                index: 0,
                item_elapsed: 0
            }
        );
        assert_eq!(
            tracker.position_at(89_999),
            RunPosition::Inside {
                index: 0,
                item_elapsed: 89_999
            }
        );
        // An item start belongs to that item; the zero-length bumper at the
        // same offset is skipped.
        assert_eq!(
            tracker.position_at(90_000),
            RunPosition::Inside {
                index: 2,
                item_elapsed: 0
            }
        );
        assert_eq!(
            tracker.position_at(209_999),
            RunPosition::Inside {
                index: 2,
                item_elapsed: 119_999
            }
        );
        assert_eq!(
            tracker.position_at(210_000),
            RunPosition::Overrun { past_end: 0 }
        );
        assert_eq!(
            tracker.position_at(215_500),
            RunPosition::Overrun { past_end: 5_500 }
        );
    }

    #[test]
    fn test_position_at_clamps_negative_elapsed() {
        let tracker = RundownTracker::new(&sample_schedule(), DiffStrategy::default()).unwrap();
        assert_eq!(tracker.position_at(-5_000), tracker.position_at(0));
    }

    #[test]
    fn test_empty_schedule_is_always_overrun() {
        let tracker = RundownTracker::new(&Schedule::default(), DiffStrategy::default()).unwrap();
        assert!(tracker.is_empty());
        assert_eq!(tracker.total_length(), 0);
        assert_eq!(
            tracker.position_at(1_000),
            RunPosition::Overrun { past_end: 1_000 }
        );
    }

    #[test]
    fn test_invalid_length_fails_at_load() {
        let schedule = Schedule::from_items(vec![
            ScheduleItem::new("Opening", "1:30"),
            ScheduleItem::new("Weather", "soon"),
        ]);
        let err = RundownTracker::new(&schedule, DiffStrategy::default()).unwrap_err();
        match err {
            Error::ScheduleItemError { position, name, .. } => {
                assert_eq!(position, 2);
                assert_eq!(name, "Weather");
            }
            other => panic!("expected ScheduleItemError, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_length_fails_at_load() {
        // A negative duration would pull the next start offset before the
        // previous item's end and shrink the total length.
        let schedule = Schedule::from_items(vec![
            ScheduleItem::new("Opening", "1:30"),
            ScheduleItem::new("Bumper", "-1:00"),
            ScheduleItem::new("Weather", "2:00"),
        ]);
        let err = RundownTracker::new(&schedule, DiffStrategy::default()).unwrap_err();
        match err {
            Error::ScheduleItemError { position, name, source } => {
                assert_eq!(position, 2);
                assert_eq!(name, "Bumper");
                assert!(source.to_string().contains("negative"));
            }
            other => panic!("expected ScheduleItemError, got {other:?}"),
        }
    }

    #[test]
    fn test_remaining_label_counts_down() {
        let tracker =
            RundownTracker::new(&sample_schedule(), DiffStrategy::AsymmetricRounding).unwrap();
        assert_eq!(tracker.remaining_label(0, 0), "1:30");
        assert_eq!(tracker.remaining_label(0, 30_000), "1:00");
        assert_eq!(tracker.remaining_label(0, 90_000), "0:00");
        assert_eq!(tracker.elapsed_label(65_000), "1:05");
    }

    #[test]
    fn test_run_position_index() {
        assert_eq!(
            RunPosition::Inside {
                index: 4,
                item_elapsed: 0
            }
            .index(),
            Some(4)
        );
        assert_eq!(RunPosition::Overrun { past_end: 0 }.index(), None);
    }

    #[test]
    fn test_run_clock_seek_and_reset() {
        let mut clock = RunClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), 0);

        clock.seek(5_000);
        assert_eq!(clock.elapsed(), 5_000);
        assert!(!clock.is_running());

        clock.reset();
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_run_clock_toggle_accumulates() {
        let mut clock = RunClock::new();
        clock.seek(5_000);

        assert!(clock.toggle());
        assert!(clock.is_running());
        assert!(clock.elapsed() >= 5_000);

        assert!(!clock.toggle());
        assert!(!clock.is_running());
        let paused = clock.elapsed();
        assert!(paused >= 5_000);
        assert_eq!(clock.elapsed(), paused);
    }

    #[test]
    fn test_run_clock_seek_negative_clamps() {
        let mut clock = RunClock::new();
        clock.seek(-1_000);
        assert_eq!(clock.elapsed(), 0);
    }
}
