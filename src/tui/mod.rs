//! Terminal User Interface for rundown
//!
//! This module provides the schedule viewer using Ratatui: a live run
//! clock tracked against the rundown, with per-item elapsed/remaining
//! displays and a status-message panel for user-visible alerts.

pub mod app;
pub mod events;
pub mod ui;

use app::AppState;
use events::handle_key_event;
use ui::draw_ui;

use crate::{
    config::{Config, EVENT_POLL_INTERVAL_MS},
    error::{Error, Result},
    schedule::{RundownTracker, Schedule},
    session::{SessionOptions, SystemEnvironment, create_session},
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, time::Duration};
use tokio::{sync::Mutex, time::interval};

/// Main rundown viewer application
pub struct RundownTui {
    /// Application state
    state: Arc<Mutex<AppState>>,
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Refresh interval of the rundown position in milliseconds
    tick_interval_ms: u64,
}

impl RundownTui {
    /// Creates a new rundown viewer
    ///
    /// Validates every schedule item length up front and generates the
    /// viewer session before touching the terminal.
    pub fn new(schedule: Schedule, config: &Config) -> Result<Self> {
        let tracker = RundownTracker::new(&schedule, config.diff_strategy)?;
        let environment = SystemEnvironment::new(&config.share_origin);
        let session = create_session(&environment, &SessionOptions::from_config(config));

        // Setup terminal
        enable_raw_mode().map_err(|e| Error::TerminalError {
            message: format!("Failed to enable raw mode: {e}"),
        })?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
            Error::TerminalError {
                message: format!("Failed to setup terminal: {e}"),
            }
        })?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| Error::TerminalError {
            message: format!("Failed to create terminal: {e}"),
        })?;

        let state = Arc::new(Mutex::new(AppState::new(schedule, tracker, session)));

        Ok(Self {
            state,
            terminal,
            tick_interval_ms: config.tick_interval_ms,
        })
    }

    /// Runs the rundown viewer
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting rundown viewer");

        // Start position update task
        let state_clone = Arc::clone(&self.state);
        let tick_interval_ms = self.tick_interval_ms;
        let update_handle = tokio::spawn(async move {
            let mut interval = interval(Duration::from_millis(tick_interval_ms));
            loop {
                interval.tick().await;
                if let Ok(mut state) = state_clone.try_lock() {
                    if state.should_quit {
                        break;
                    }
                    state.update_position();
                }
            }
        });

        // Main event loop
        let result = self.event_loop().await;

        // Cleanup
        update_handle.abort();
        self.cleanup()?;

        result
    }

    /// Main event loop
    async fn event_loop(&mut self) -> Result<()> {
        loop {
            // Check if we should quit
            {
                let state = self.state.lock().await;
                if state.should_quit {
                    break;
                }
            }

            // Draw the UI
            let state = self.state.lock().await.clone();
            self.terminal
                .draw(|f| draw_ui(f, &state))
                .map_err(|e| Error::TerminalError {
                    message: format!("Failed to draw UI: {e}"),
                })?;

            // Handle events
            if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS)).map_err(|e| {
                Error::TerminalError {
                    message: format!("Failed to poll for events: {e}"),
                }
            })? {
                match event::read().map_err(|e| Error::TerminalError {
                    message: format!("Failed to read event: {e}"),
                })? {
                    Event::Key(key_event) => {
                        if key_event.kind == KeyEventKind::Press {
                            handle_key_event(Arc::clone(&self.state), key_event.code).await?;
                        }
                    }
                    Event::Resize(_, _) => {
                        // Terminal was resized, will be handled on next draw
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Cleanup terminal state
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().map_err(|e| Error::TerminalError {
            message: format!("Failed to disable raw mode: {e}"),
        })?;

        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(|e| Error::TerminalError {
            message: format!("Failed to cleanup terminal: {e}"),
        })?;

        self.terminal
            .show_cursor()
            .map_err(|e| Error::TerminalError {
                message: format!("Failed to show cursor: {e}"),
            })?;

        Ok(())
    }
}

/// Starts the rundown viewer
pub async fn start_rundown_tui(schedule: Schedule, config: Config) -> Result<()> {
    let mut app = RundownTui::new(schedule, &config)?;
    app.run().await
}
