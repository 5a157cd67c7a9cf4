//! CLI command implementations for rundown
//!
//! This module contains the implementation of CLI commands including
//! the import and view functionality.

mod import;
mod view;

pub use import::ImportCommand;
pub use view::ViewCommand;

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a CSV running-order export into a JSON schedule
    Import(super::Import),

    /// Track a JSON schedule against a live clock in the terminal
    View(super::View),
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = match self {
            Self::Import(import) => cli.build_config(Some(import), None),
            Self::View(view) => cli.build_config(None, Some(view)),
        };
        self.setup_log(&config);
        match self {
            Self::Import(import) => ImportCommand::new(import).run(&config)?,
            Self::View(view) => ViewCommand::new(view).run(&config).await?,
        }
        Ok(())
    }

    /// Setup logging configuration
    fn setup_log(&self, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = if let Ok(rundown_log) = env::var(LOG_LEVEL_ENV_VAR) {
            match rundown_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => config.log_level,
            }
        } else {
            config.log_level
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
