//! Import command implementation for rundown
//!
//! This module implements the import command, the one-shot batch
//! transform from a CSV running-order export to a JSON schedule.

use crate::{
    config::{Config, LOG_MSG_IMPORT_SCHEDULE},
    error::Result,
    schedule::import_schedule,
};
use log::info;

/// Import command implementation
pub struct ImportCommand<'a> {
    args: &'a super::super::Import,
}

impl<'a> ImportCommand<'a> {
    /// Create a new import command
    pub fn new(args: &'a super::super::Import) -> Self {
        Self { args }
    }

    /// Execute the import command
    pub fn run(&self, config: &Config) -> Result<()> {
        info!("{LOG_MSG_IMPORT_SCHEDULE}");
        let count = import_schedule(&self.args.input, &self.args.output, config)?;
        println!(
            "Imported {count} schedule items to {}",
            self.args.output.display()
        );
        Ok(())
    }
}
