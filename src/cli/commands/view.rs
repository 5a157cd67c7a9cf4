//! View command implementation for rundown
//!
//! This module implements the view command, which loads a JSON schedule
//! and tracks it against a live clock in the terminal.

use crate::{
    config::{Config, LOG_MSG_START_VIEWER},
    error::Result,
    schedule::Schedule,
    tui::start_rundown_tui,
};
use log::info;

/// View command implementation
pub struct ViewCommand<'a> {
    args: &'a super::super::View,
}

impl<'a> ViewCommand<'a> {
    /// Create a new view command
    pub fn new(args: &'a super::super::View) -> Self {
        Self { args }
    }

    /// Execute the view command
    pub async fn run(&self, config: &Config) -> Result<()> {
        info!("{LOG_MSG_START_VIEWER}");
        let schedule = Schedule::load(&self.args.schedule)?;
        start_rundown_tui(schedule, config.clone()).await
    }
}
