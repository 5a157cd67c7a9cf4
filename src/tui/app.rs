//! TUI application state management for rundown
//!
//! This module contains the application state structure and related
//! functionality for the rundown viewer.

use crate::schedule::{RunClock, RunPosition, RundownTracker, Schedule, TimedItem};
use crate::session::Session;
use crate::utils::time::format_timestamp;
use log::info;
use std::time::Instant;

/// Application state for the rundown viewer
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded schedule
    pub schedule: Schedule,
    /// Validated rundown timing
    pub tracker: RundownTracker,
    /// The live run clock
    pub clock: RunClock,
    /// Resolved rundown position at the last tick
    pub position: RunPosition,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: String,
    /// Error message to display
    pub error_message: Option<String>,
    /// Last update time
    pub last_update: Instant,
    /// Selected schedule row
    pub selected_item: usize,
    /// Whether the help dialog is shown
    pub show_help: bool,
    /// Whether the session info dialog is shown
    pub show_session_info: bool,
    /// Generated viewer session
    pub session: Session,
}

impl AppState {
    /// Creates a new application state
    pub fn new(schedule: Schedule, tracker: RundownTracker, session: Session) -> Self {
        let position = tracker.position_at(0);
        Self {
            schedule,
            tracker,
            clock: RunClock::new(),
            position,
            should_quit: false,
            status_message: "Ready - press SPACE to start the clock".to_string(),
            error_message: None,
            last_update: Instant::now(),
            selected_item: 0,
            show_help: false,
            show_session_info: false,
            session,
        }
    }

    /// Re-resolves the rundown position from the run clock
    ///
    /// Raises a status message on item transitions and when the rundown
    /// runs over its planned end.
    pub fn update_position(&mut self) {
        let previous_index = self.position.index();
        let was_overrun = matches!(self.position, RunPosition::Overrun { .. });

        self.position = self.tracker.position_at(self.clock.elapsed());

        match self.position {
            RunPosition::Inside { index, .. } => {
                if previous_index != Some(index) {
                    let name = self.tracker.get(index).map(|item| item.name.clone());
                    if let Some(name) = name {
                        info!("Item transition: {name}");
                        self.set_status_message(format!("Now: {name}"));
                    }
                }
            }
            RunPosition::Overrun { .. } => {
                if !was_overrun && self.clock.is_running() && !self.tracker.is_empty() {
                    info!("Rundown passed its planned end");
                    self.set_status_message("Rundown complete - clock is overrunning".to_string());
                }
            }
        }

        self.last_update = Instant::now();
    }

    /// Starts, pauses or resumes the run clock
    pub fn toggle_clock(&mut self) {
        if self.clock.toggle() {
            self.set_status_message("Clock running".to_string());
        } else {
            self.set_status_message(format!(
                "Paused at {}",
                format_timestamp(self.clock.elapsed())
            ));
        }
    }

    /// Stops the run clock and rewinds it to zero
    pub fn reset_clock(&mut self) {
        self.clock.reset();
        self.update_position();
        self.set_status_message("Clock reset".to_string());
    }

    /// Jumps the run clock to the start of the selected item
    pub fn jump_to_selected(&mut self) {
        let target = self
            .tracker
            .get(self.selected_item)
            .map(|item| (item.start, item.name.clone()));
        if let Some((start, name)) = target {
            self.clock.seek(start);
            self.update_position();
            self.set_status_message(format!("Jumped to: {name}"));
        }
    }

    /// Moves the selection to the next schedule row
    pub fn next_item(&mut self) {
        if !self.schedule.is_empty() {
            self.selected_item = (self.selected_item + 1) % self.schedule.len();
        }
    }

    /// Moves the selection to the previous schedule row
    pub fn previous_item(&mut self) {
        if !self.schedule.is_empty() {
            self.selected_item = if self.selected_item == 0 {
                self.schedule.len() - 1
            } else {
                self.selected_item - 1
            };
        }
    }

    /// Gets the currently selected rundown item
    pub fn get_selected_item(&self) -> Option<&TimedItem> {
        self.tracker.get(self.selected_item)
    }

    /// Sets a status message
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = message;
    }

    /// Sets an error message
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// Toggles the help dialog
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Toggles the session info dialog
    pub fn toggle_session_info(&mut self) {
        self.show_session_info = !self.show_session_info;
    }

    /// Closes all dialogs
    pub fn close_dialogs(&mut self) {
        self.show_help = false;
        self.show_session_info = false;
    }

    /// Marks the app for quitting
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
